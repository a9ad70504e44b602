use std::fmt;

/// Display category of a technology badge. Every token maps to exactly one
/// category; anything the table does not know lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechCategory {
    Frontend,
    Backend,
    Database,
    Tool,
    Other,
}

impl TechCategory {
    pub fn css_class(&self) -> &'static str {
        match self {
            TechCategory::Frontend => "frontend",
            TechCategory::Backend => "backend",
            TechCategory::Database => "database",
            TechCategory::Tool => "tool",
            TechCategory::Other => "other",
        }
    }
}

impl fmt::Display for TechCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Lookup table checked in this exact order; the first category whose entry
/// matches wins, so e.g. "MySQL" classifies as backend via the "SQL" entry
/// before the database row is ever consulted.
const CATEGORY_TABLE: &[(TechCategory, &[&str])] = &[
    (
        TechCategory::Frontend,
        &[
            "Front-end",
            "JavaScript",
            "TypeScript",
            "HTML",
            "CSS",
            "React",
            "Vue",
            "Angular",
            "Next.js",
            "Tailwind",
            "Tailwind CSS",
            "Bootstrap",
            "Github Pages",
            "Responsive",
            "JQuery",
        ],
    ),
    (
        TechCategory::Backend,
        &[
            "Full-Stack",
            "SQL",
            "Back-end",
            "Python",
            "Java",
            "Ruby",
            "PHP",
            "Node.js",
            "Express",
            "Django",
            "Flask",
            "EJS",
            "Dotenv",
            "API",
            "Github Actions",
        ],
    ),
    (
        TechCategory::Database,
        &[
            "MongoDB",
            "PostgreSQL",
            "MySQL",
            "Redis",
            "Mongoose",
            "Supabase",
            "Firebase",
        ],
    ),
    (
        TechCategory::Tool,
        &[
            "Webpack",
            "Babel",
            "ESLint",
            "Prettier",
            "Docker",
            "Kubernetes",
            "Wordpress",
            "Yarn",
            "Chocolatey",
            "Slack",
            "Postman",
            "N8N",
            "Webhook",
            "pip",
            "npm",
            "Whisper",
            "BeautifulSoup",
            "Power BI",
        ],
    ),
];

/// Classify one technology token (a language name or a manifest keyword) by
/// case-insensitive substring match against the fixed table. Pure and total.
pub fn categorize_tech(tech: &str) -> TechCategory {
    let needle = tech.to_lowercase();

    for (category, entries) in CATEGORY_TABLE {
        if entries
            .iter()
            .any(|entry| needle.contains(&entry.to_lowercase()))
        {
            return *category;
        }
    }

    TechCategory::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_known_tokens() {
        assert_eq!(categorize_tech("Python"), TechCategory::Backend);
        assert_eq!(categorize_tech("React"), TechCategory::Frontend);
        assert_eq!(categorize_tech("Redis"), TechCategory::Database);
        assert_eq!(categorize_tech("Docker"), TechCategory::Tool);
        assert_eq!(categorize_tech("Zig"), TechCategory::Other);
    }

    #[test]
    fn test_categorize_is_case_insensitive() {
        assert_eq!(categorize_tech("PYTHON"), TechCategory::Backend);
        assert_eq!(categorize_tech("typescript"), TechCategory::Frontend);
        assert_eq!(categorize_tech("mongodb"), TechCategory::Database);
    }

    #[test]
    fn test_categorize_matches_substrings() {
        // "Tailwind CSS" hits both "Tailwind" and "CSS" in the frontend row.
        assert_eq!(categorize_tech("Tailwind CSS"), TechCategory::Frontend);
        assert_eq!(categorize_tech("github-pages"), TechCategory::Other);
        assert_eq!(categorize_tech("Github Pages"), TechCategory::Frontend);
    }

    #[test]
    fn test_categorize_first_match_wins() {
        // The backend row's "SQL" entry fires before the database row sees
        // "MySQL" or "PostgreSQL".
        assert_eq!(categorize_tech("MySQL"), TechCategory::Backend);
        assert_eq!(categorize_tech("PostgreSQL"), TechCategory::Backend);
        // "Mongoose" only appears in the database row.
        assert_eq!(categorize_tech("Mongoose"), TechCategory::Database);
    }

    #[test]
    fn test_categorize_total_on_edge_inputs() {
        assert_eq!(categorize_tech(""), TechCategory::Other);
        assert_eq!(categorize_tech("   "), TechCategory::Other);
        assert_eq!(categorize_tech("C++"), TechCategory::Other);
    }

    #[test]
    fn test_css_class_names() {
        assert_eq!(TechCategory::Frontend.css_class(), "frontend");
        assert_eq!(TechCategory::Other.css_class(), "other");
        assert_eq!(format!("{}", TechCategory::Tool), "tool");
    }
}
