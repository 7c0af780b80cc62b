//! Static page content and the lookup tables the views use to decorate it.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub category: &'static str,
    /// Self-assessed proficiency, 0-100.
    pub level: u8,
    /// Extra search terms (frameworks, aliases).
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub repo_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Education {
    pub period: &'static str,
    pub degree: &'static str,
    pub school: &'static str,
    pub details: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Alex Morgan",
    role: "Software Engineer",
    tagline: "Building fast, dependable software for the web and beyond.",
    location: "Lisbon, Portugal",
    summary: "I design and build web applications, developer tools and the \
              services behind them. I care about clear interfaces, honest \
              performance numbers and code the next person can read.",
};

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "2022 - Present",
        title: "Senior Software Engineer",
        organization: "Northwind Labs",
        description: "Lead the front-end platform team; moved the design system to WebAssembly components.",
    },
    TimelineEntry {
        period: "2019 - 2022",
        title: "Software Engineer",
        organization: "Bluefield Analytics",
        description: "Built streaming dashboards and the ingestion services feeding them.",
    },
    TimelineEntry {
        period: "2017 - 2019",
        title: "Junior Developer",
        organization: "Studio Copperleaf",
        description: "Shipped client sites and internal tooling for a small agency.",
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "Rust", category: "languages", level: 90, keywords: &["systems", "wasm", "cargo"] },
    Skill { name: "TypeScript", category: "languages", level: 85, keywords: &["javascript", "node"] },
    Skill { name: "Python", category: "languages", level: 75, keywords: &["scripting", "data"] },
    Skill { name: "Leptos", category: "frontend", level: 80, keywords: &["wasm", "reactive", "ssr"] },
    Skill { name: "React", category: "frontend", level: 85, keywords: &["jsx", "hooks", "spa"] },
    Skill { name: "CSS", category: "frontend", level: 70, keywords: &["responsive", "animation"] },
    Skill { name: "Axum", category: "backend", level: 80, keywords: &["http", "api", "tokio"] },
    Skill { name: "PostgreSQL", category: "backend", level: 75, keywords: &["sql", "database"] },
    Skill { name: "Docker", category: "tools", level: 70, keywords: &["containers", "devops"] },
    Skill { name: "Git", category: "tools", level: 90, keywords: &["version control", "github"] },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Tidewatch",
        category: "web",
        description: "Real-time tide and swell dashboard for coastal towns.",
        tags: &["Rust", "Leptos", "WebSockets"],
        repo_url: Some("https://github.com/example/tidewatch"),
        live_url: Some("https://tidewatch.example.dev"),
    },
    Project {
        title: "Ledgerline",
        category: "tools",
        description: "Command-line bookkeeping with plain-text ledgers and reports.",
        tags: &["Rust", "CLI"],
        repo_url: Some("https://github.com/example/ledgerline"),
        live_url: None,
    },
    Project {
        title: "Paperboat",
        category: "web",
        description: "Static site generator with incremental rebuilds.",
        tags: &["TypeScript", "Node"],
        repo_url: Some("https://github.com/example/paperboat"),
        live_url: None,
    },
    Project {
        title: "Quayside",
        category: "services",
        description: "Job queue service with at-least-once delivery on PostgreSQL.",
        tags: &["Rust", "Axum", "PostgreSQL"],
        repo_url: None,
        live_url: None,
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        period: "2015 - 2017",
        degree: "MSc Computer Science",
        school: "University of Porto",
        details: "Thesis on incremental computation for user interfaces.",
    },
    Education {
        period: "2012 - 2015",
        degree: "BSc Software Engineering",
        school: "University of Coimbra",
        details: "Graduated with honours.",
    },
];

// -- Lookup tables --

/// Accent color for a skill or project category.
pub fn category_color(category: &str) -> &'static str {
    match category {
        "languages" => "#e76f51",
        "frontend" => "#2a9d8f",
        "backend" => "#264653",
        "tools" => "#e9c46a",
        "web" => "#457b9d",
        "services" => "#6d597a",
        _ => "#8d99ae",
    }
}

/// Glyph shown next to a category heading.
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "languages" => "\u{2328}",
        "frontend" => "\u{25A3}",
        "backend" => "\u{2699}",
        "tools" | "services" => "\u{2692}",
        "web" => "\u{25CE}",
        _ => "\u{2022}",
    }
}

pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Other".to_string(),
    }
}

/// Distinct categories in first-seen order.
pub fn project_categories(projects: &[Project]) -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for project in projects {
        if !categories.contains(&project.category) {
            categories.push(project.category);
        }
    }
    categories
}

/// Projects in `category`, or all of them for `None`.
pub fn filter_projects(projects: &[Project], category: Option<&str>) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .copied()
        .collect()
}

/// Skills whose name or a keyword contains `term`, ignoring case.
/// A blank term matches everything.
pub fn search_skills(skills: &[Skill], term: &str) -> Vec<Skill> {
    let needle = term.trim().to_lowercase();
    skills
        .iter()
        .filter(|skill| {
            needle.is_empty()
                || skill.name.to_lowercase().contains(&needle)
                || skill.keywords.iter().any(|k| k.to_lowercase().contains(&needle))
        })
        .copied()
        .collect()
}

/// Skills grouped by category, groups in first-seen order.
pub fn skills_by_category(skills: &[Skill]) -> Vec<(&'static str, Vec<Skill>)> {
    let mut groups: Vec<(&'static str, Vec<Skill>)> = Vec::new();
    for skill in skills {
        if let Some(g) = groups.iter_mut().find(|(name, _)| *name == skill.category) {
            g.1.push(*skill);
        } else {
            groups.push((skill.category, vec![*skill]));
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_uses_fallbacks() {
        assert_eq!(category_color("quantum"), "#8d99ae");
        assert_eq!(category_icon("quantum"), "\u{2022}");
    }

    #[test]
    fn test_every_used_category_has_a_color() {
        let fallback = category_color("");
        for skill in SKILLS {
            assert_ne!(category_color(skill.category), fallback, "{}", skill.category);
        }
        for project in PROJECTS {
            assert_ne!(category_color(project.category), fallback, "{}", project.category);
        }
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("frontend"), "Frontend");
        assert_eq!(category_label(""), "Other");
    }

    #[test]
    fn test_project_categories_first_seen_order() {
        assert_eq!(project_categories(PROJECTS), vec!["web", "tools", "services"]);
    }

    #[test]
    fn test_filter_projects() {
        assert_eq!(filter_projects(PROJECTS, None).len(), PROJECTS.len());
        let web = filter_projects(PROJECTS, Some("web"));
        assert_eq!(web.len(), 2);
        assert!(web.iter().all(|p| p.category == "web"));
        assert!(filter_projects(PROJECTS, Some("games")).is_empty());
    }

    #[test]
    fn test_skills_grouped_without_loss() {
        let groups = skills_by_category(SKILLS);
        let names: Vec<_> = groups.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["languages", "frontend", "backend", "tools"]);
        let total: usize = groups.iter().map(|(_, skills)| skills.len()).sum();
        assert_eq!(total, SKILLS.len());
    }

    #[test]
    fn test_search_blank_term_matches_all() {
        assert_eq!(search_skills(SKILLS, "").len(), SKILLS.len());
        assert_eq!(search_skills(SKILLS, "   ").len(), SKILLS.len());
    }

    #[test]
    fn test_search_ignores_case() {
        let found = search_skills(SKILLS, "rUsT");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Rust");
    }

    #[test]
    fn test_search_matches_keywords() {
        let names: Vec<_> = search_skills(SKILLS, "WASM").iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Rust", "Leptos"]);

        let found = search_skills(SKILLS, "database");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "PostgreSQL");
    }

    #[test]
    fn test_search_without_match_is_empty() {
        assert!(search_skills(SKILLS, "cobol").is_empty());
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }
}
