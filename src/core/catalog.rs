//! The archetype catalog (compiled into the binary).
//!
//! Six research-derived personas of privacy and compliance professionals,
//! stored once as static records and referenced everywhere else by name.
//! The catalog is immutable for the lifetime of the process: there is no
//! create, update, or delete surface.

use crate::core::error;
use regex::Regex;
use serde::Serialize;

// --- Data Model ---

/// Professional category an archetype belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
pub enum ArchetypeGroup {
    #[serde(rename = "Privacy Professionals")]
    Privacy,
    #[serde(rename = "Compliance Professionals")]
    Compliance,
}

impl ArchetypeGroup {
    pub fn label(&self) -> &'static str {
        match self {
            ArchetypeGroup::Privacy => "Privacy Professionals",
            ArchetypeGroup::Compliance => "Compliance Professionals",
        }
    }
}

/// Display hint for an archetype. Presentation metadata only: two archetypes
/// with the same glyph are still distinct records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Shield,
    Workflow,
    Book,
    Gear,
    Trend,
    Cycle,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Shield => "🛡",
            Icon::Workflow => "🔀",
            Icon::Book => "📖",
            Icon::Gear => "⚙",
            Icon::Trend => "📈",
            Icon::Cycle => "🔄",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Archetype {
    /// Unique display name; the primary key used by decision questions.
    pub name: &'static str,
    pub group: ArchetypeGroup,
    pub core_identity: &'static str,
    pub key_traits: &'static str,
    pub goals: &'static str,
    pub challenges: &'static str,
    pub ux_needs: &'static str,
    pub pm_focus: &'static str,
    /// Questions a team should ask of a feature aimed at this archetype.
    pub key_questions: &'static [&'static str],
    pub icon: Icon,
    /// Tags matched by `map suggest` against free-text feature descriptions.
    pub keywords: &'static [&'static str],
}

// --- Embedded Catalog ---

static ARCHETYPES: [&Archetype; 6] = [
    &VIGILANT_GUARDIAN,
    &PRAGMATIC_IMPLEMENTER,
    &COMMUNICATOR_EDUCATOR,
    &RULE_MASTER,
    &RISK_NAVIGATOR,
    &PROCESS_OPTIMIZER,
];

pub fn archetypes() -> &'static [&'static Archetype] {
    &ARCHETYPES
}

static VIGILANT_GUARDIAN: Archetype = Archetype {
    name: "The Vigilant Guardian",
    group: ArchetypeGroup::Privacy,
    core_identity: "Meticulous and highly risk-averse, prioritizing comprehensive data security and strict regulatory adherence.",
    key_traits: "Meticulous, highly risk-averse, security-focused.",
    goals: "Reduce legal risk, enhance trust, ensure thorough compliance, minimize breaches.",
    challenges: "Overwhelmed by complexity, tools lack comprehensive risk assessment.",
    ux_needs: "Granular controls, detailed audit trails, clear data flow visuals, customizable reporting.",
    pm_focus: "Reduces legal risk, enhances trust, ensures thorough compliance, minimizes data breaches.",
    key_questions: &[
        "Does this feature provide real-time risk alerts for policy violations?",
        "Can users customize data access policies with version control?",
        "Does it offer comprehensive, searchable audit logs with export options?",
        "How does this feature enhance the user's ability to monitor and control data security?",
    ],
    icon: Icon::Shield,
    keywords: &["data security", "access control", "auditing", "strict adherence", "regulations"],
};

static PRAGMATIC_IMPLEMENTER: Archetype = Archetype {
    name: "The Pragmatic Implementer",
    group: ArchetypeGroup::Privacy,
    core_identity: "Efficiency-driven, practical, seeks seamless integration with existing systems and automation of tasks.",
    key_traits: "Efficiency-driven, practical, seeks integration and automation.",
    goals: "Improve operational efficiency, reduce manual effort, speed tasks, increase adoption.",
    challenges: "Legacy systems, integration issues, lack of user-friendly automation.",
    ux_needs: "Intuitive workflows, seamless API integrations, automated routine processes, clear documentation.",
    pm_focus: "Improves operational efficiency, reduces manual effort, speeds up task completion, increases system adoption.",
    key_questions: &[
        "Does this feature offer intuitive workflow builders for privacy processes?",
        "Is there a dashboard for monitoring API integration health and data syncs?",
        "Does it include automated consent management flows with pre-built templates?",
        "How does this feature simplify and automate routine privacy tasks?",
    ],
    icon: Icon::Workflow,
    keywords: &["efficiency", "automation", "integration", "workflows"],
};

static COMMUNICATOR_EDUCATOR: Archetype = Archetype {
    name: "The Communicator & Educator",
    group: ArchetypeGroup::Privacy,
    core_identity: "Focused on fostering privacy awareness, adept at explaining complex privacy concepts to diverse internal and external audiences.",
    key_traits: "Fosters privacy awareness, adept at explaining complex concepts.",
    goals: "Drive internal policy adoption, build privacy-aware culture, empower transparent communication.",
    challenges: "Creating engaging materials, varying awareness levels, ensuring consistent messaging.",
    ux_needs: "Tools for creating and managing engaging privacy training content, internal communication platforms, visual aids, progress tracking.",
    pm_focus: "Drives internal adoption of privacy policies, builds a strong privacy-aware culture, empowers transparent communication to consumers.",
    key_questions: &[
        "Does this feature offer customizable privacy policy templates with versioning?",
        "Does it include interactive training modules with quizzes and progress tracking?",
        "Is there an internal communication dashboard for privacy news and updates?",
        "How does this feature help users effectively convey privacy information to others?",
    ],
    icon: Icon::Book,
    keywords: &["communication", "education", "awareness", "training"],
};

static RULE_MASTER: Archetype = Archetype {
    name: "The Rule Master",
    group: ArchetypeGroup::Compliance,
    core_identity: "Possesses an in-depth understanding of regulations, meticulous about accuracy and strict adherence to legal texts.",
    key_traits: "In-depth regulatory understanding, meticulous about accuracy and adherence.",
    goals: "Ensure strict adherence, minimize audit failures, maintain legal standing, reduce penalties.",
    challenges: "Keeping up with regulations, consistent application, dealing with ambiguity.",
    ux_needs: "Up-to-date, searchable regulatory libraries with cross-references, control mapping tools, robust audit management, comprehensive record-keeping.",
    pm_focus: "Ensures strict adherence, minimizes audit failures, maintains legal standing, reduces non-compliance penalties.",
    key_questions: &[
        "Does this feature provide dynamic regulatory change alerts with impact analysis?",
        "Does it include robust control-to-regulation mapping tools with visual linkages?",
        "Can users leverage automated compliance checklists based on specific regulations?",
        "How does this feature support the user's need for precision and thoroughness in compliance?",
    ],
    icon: Icon::Gear,
    keywords: &["regulations", "compliance", "auditing", "legal adherence", "accuracy"],
};

static RISK_NAVIGATOR: Archetype = Archetype {
    name: "The Risk Navigator",
    group: ArchetypeGroup::Compliance,
    core_identity: "Strategic thinker, proactive in identifying, assessing, and mitigating potential compliance risks across the organization.",
    key_traits: "Strategic, proactive in identifying/mitigating risks.",
    goals: "Proactive risk reduction, strategic decision-making, long-term resilience, improved risk communication.",
    challenges: "Holistic risk view, prioritizing effectively, communicating assessments to leadership.",
    ux_needs: "Interactive risk maps/dashboards, customizable risk scoring, predictive analytics, automated risk reporting.",
    pm_focus: "Proactive risk reduction, strategic decision-making, long-term organizational resilience, improved risk communication to leadership.",
    key_questions: &[
        "Does this feature offer tools for scenario planning for 'what-if' compliance situations?",
        "Are there cross-departmental risk dashboards with drill-down capabilities?",
        "Does it integrate with vulnerability scanning and threat intelligence feeds?",
        "How does this feature empower users to proactively identify and manage risks?",
    ],
    icon: Icon::Trend,
    keywords: &["risk assessment", "mitigation", "strategic planning", "predictive analytics"],
};

static PROCESS_OPTIMIZER: Archetype = Archetype {
    name: "The Process Optimizer",
    group: ArchetypeGroup::Compliance,
    core_identity: "Focused on streamlining workflows, improving efficiency, and reducing friction in compliance processes.",
    key_traits: "Focuses on streamlining workflows, improving efficiency.",
    goals: "Increase operational efficiency, reduce manual effort, improve user satisfaction, drive faster cycles.",
    challenges: "Balancing compliance with usability, integrating new processes, finding effective tech solutions.",
    ux_needs: "Process mapping/optimization tools, workflow automation, user-friendly guided procedures, enterprise system integration.",
    pm_focus: "Increases operational efficiency, reduces manual effort, improves user satisfaction with compliance tasks, drives faster compliance cycles.",
    key_questions: &[
        "Does this feature offer customizable workflow templates for common compliance processes?",
        "Does it include automated task assignment and notification system?",
        "Does it provide performance analytics for compliance processes (e.g., time to complete, bottlenecks)?",
        "How does this feature help users streamline and improve their compliance workflows?",
    ],
    icon: Icon::Cycle,
    keywords: &["process improvement", "workflow optimization", "efficiency", "automation"],
};

// --- Lookup ---

/// Resolve a name to its catalog record, or `None` for unknown names.
/// Question data goes through this so that a stale reference degrades to
/// a smaller suggestion set instead of an error.
pub fn lookup_archetype(name: &str) -> Option<&'static Archetype> {
    archetypes().iter().copied().find(|a| a.name == name)
}

pub fn find_archetype(name: &str) -> Result<&'static Archetype, error::ArchemapError> {
    lookup_archetype(name).ok_or_else(|| {
        let valid: Vec<&str> = archetypes().iter().map(|a| a.name).collect();
        error::ArchemapError::ValidationError(format!(
            "Unknown archetype '{}'. Available: {}",
            name,
            valid.join(", ")
        ))
    })
}

/// Subset of the catalog matching an optional group and an optional regex
/// over archetype names. Catalog order is preserved.
pub fn filter_archetypes(
    group: Option<ArchetypeGroup>,
    name_pattern: Option<&str>,
) -> Result<Vec<&'static Archetype>, error::ArchemapError> {
    let matcher = match name_pattern {
        Some(pattern) => Some(Regex::new(pattern).map_err(|e| {
            error::ArchemapError::ValidationError(format!(
                "Invalid filter pattern '{}': {}",
                pattern, e
            ))
        })?),
        None => None,
    };

    Ok(archetypes()
        .iter()
        .copied()
        .filter(|a| match group {
            Some(g) => a.group == g,
            None => true,
        })
        .filter(|a| match &matcher {
            Some(re) => re.is_match(a.name),
            None => true,
        })
        .collect())
}

// --- Keyword suggestion ---

#[derive(Debug, Serialize)]
pub struct ArchetypeSuggestion {
    pub name: &'static str,
    pub group: ArchetypeGroup,
    pub score: f64,
    pub matched_keywords: Vec<String>,
}

/// Match a free-text feature description against each archetype's keyword
/// tags. Tokens under 3 characters are noise and dropped; matching is
/// substring containment in either direction. Score is the fraction of the
/// archetype's keywords that matched; zero-score entries are removed.
pub fn suggest_archetypes(prompt: &str) -> Vec<ArchetypeSuggestion> {
    let tokens: Vec<String> = prompt
        .to_lowercase()
        .split_whitespace()
        .map(|s| s.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|s| s.len() >= 3)
        .collect();

    let mut suggestions: Vec<ArchetypeSuggestion> = archetypes()
        .iter()
        .map(|archetype| {
            let matched: Vec<String> = archetype
                .keywords
                .iter()
                .filter(|kw| {
                    tokens
                        .iter()
                        .any(|t| t.contains(*kw) || kw.contains(t.as_str()))
                })
                .map(|s| s.to_string())
                .collect();
            let score = if archetype.keywords.is_empty() {
                0.0
            } else {
                matched.len() as f64 / archetype.keywords.len() as f64
            };
            ArchetypeSuggestion {
                name: archetype.name,
                group: archetype.group,
                score,
                matched_keywords: matched,
            }
        })
        .collect();

    suggestions.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    suggestions.retain(|s| s.score > 0.0);
    suggestions
}
