use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Skill categories and their representative keywords.
///
/// A skill belongs to a category when any keyword is a substring of the
/// skill's lowercase raw form, so order here only affects iteration order.
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Web Development",
        &[
            "javascript", "react", "angular", "vue", "html", "css", "node.js", "express",
            "django", "flask", "php", "laravel", "wordpress",
        ],
    ),
    (
        "Mobile Development",
        &["react native", "flutter", "swift", "kotlin", "android", "ios", "xamarin", "ionic"],
    ),
    (
        "Data Science",
        &[
            "python", "r", "matplotlib", "pandas", "numpy", "scikit-learn", "tensorflow",
            "pytorch", "jupyter",
        ],
    ),
    (
        "DevOps",
        &["docker", "kubernetes", "aws", "azure", "gcp", "jenkins", "git", "ci/cd", "terraform"],
    ),
    (
        "Database",
        &["sql", "mysql", "postgresql", "mongodb", "redis", "oracle", "sqlite"],
    ),
    (
        "Cybersecurity",
        &[
            "penetration testing", "ethical hacking", "network security", "cryptography",
            "security analysis",
        ],
    ),
    (
        "AI/ML",
        &[
            "machine learning", "deep learning", "neural networks", "nlp", "computer vision",
            "reinforcement learning",
        ],
    ),
    (
        "Cloud Computing",
        &["aws", "azure", "gcp", "cloud architecture", "serverless", "microservices"],
    ),
    (
        "Software Testing",
        &["unit testing", "integration testing", "selenium", "jest", "pytest", "qa"],
    ),
    (
        "UI/UX",
        &["figma", "adobe xd", "sketch", "user research", "wireframing", "prototyping"],
    ),
];

/// Alias spelling → canonical skill name.
///
/// Keys are matched after normalization has stripped punctuation, so the
/// dotted spellings only ever match through their undotted twins.
pub static SKILL_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let aliases: &[(&str, &[&str])] = &[
        // JavaScript ecosystem
        ("javascript", &["js", "javascript", "ecmascript"]),
        ("react", &["react.js", "reactjs", "react"]),
        ("angular", &["angular.js", "angularjs", "angular"]),
        ("vue", &["vue.js", "vuejs", "vue"]),
        ("node.js", &["node.js", "nodejs", "node"]),
        // Python
        ("python", &["python", "py"]),
        // Databases
        ("mysql", &["mysql"]),
        ("postgresql", &["postgresql", "postgres"]),
        ("mongodb", &["mongodb", "mongo"]),
        // AI/ML
        ("machine learning", &["ml", "machine learning"]),
        ("artificial intelligence", &["ai", "artificial intelligence"]),
        ("deep learning", &["deep learning", "dl"]),
        ("natural language processing", &["nlp", "natural language processing"]),
        // Cloud
        ("aws", &["aws", "amazon web services"]),
        ("azure", &["azure", "microsoft azure"]),
        ("gcp", &["gcp", "google cloud platform", "google cloud"]),
        // Frameworks
        ("express", &["express.js", "expressjs", "express"]),
        ("django", &["django"]),
        ("flask", &["flask"]),
        ("laravel", &["laravel"]),
        ("php", &["php"]),
        ("wordpress", &["wordpress", "wp"]),
        // Mobile
        ("react native", &["react native", "reactnative"]),
        ("flutter", &["flutter", "dart"]),
        ("swift", &["swift"]),
        ("kotlin", &["kotlin"]),
        ("android", &["android"]),
        ("ios", &["ios"]),
        // DevOps
        ("docker", &["docker"]),
        ("kubernetes", &["kubernetes", "k8s"]),
        ("jenkins", &["jenkins"]),
        ("git", &["git", "github"]),
        ("terraform", &["terraform"]),
        ("ci/cd", &["ci/cd", "cicd"]),
        // Testing
        ("selenium", &["selenium"]),
        ("jest", &["jest"]),
        ("pytest", &["pytest"]),
        ("unit testing", &["unit testing"]),
        ("integration testing", &["integration testing"]),
        ("quality assurance", &["qa", "quality assurance"]),
        // UI/UX
        ("figma", &["figma"]),
        ("adobe xd", &["adobe xd"]),
        ("sketch", &["sketch"]),
        ("user research", &["user research"]),
        ("wireframing", &["wireframing"]),
        ("prototyping", &["prototyping"]),
        ("user interface", &["ui"]),
        ("user experience", &["ux"]),
    ];

    let mut map = HashMap::new();
    for (canonical, spellings) in aliases {
        for spelling in *spellings {
            map.insert(*spelling, *canonical);
        }
    }
    map
});

/// Single-word vocabulary entries with punctuation stripped.
///
/// These are treated as dictionary base forms by the lemmatizer, which keeps
/// names like "pandas" or "kubernetes" from losing their trailing `s`.
/// Words inside multiword phrases ("neural networks") are not included.
pub static VOCABULARY_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    let keywords = SKILL_CATEGORIES
        .iter()
        .flat_map(|(_, keywords)| keywords.iter().copied());
    let aliases = SKILL_ALIASES
        .iter()
        .flat_map(|(spelling, canonical)| [*spelling, *canonical]);

    keywords
        .chain(aliases)
        .filter(|entry| !entry.contains(char::is_whitespace))
        .map(|entry| entry.chars().filter(|c| c.is_alphanumeric() || *c == '_').collect::<String>())
        .filter(|word| !word.is_empty())
        .collect()
});

/// Resolve an already-cleaned skill string through the alias table.
#[inline]
pub fn resolve_alias(skill: &str) -> Option<&'static str> {
    SKILL_ALIASES.get(skill).copied()
}

/// Categories touched by a single lowercase raw skill.
pub fn categories_for(skill_lower: &str) -> impl Iterator<Item = &'static str> + '_ {
    SKILL_CATEGORIES
        .iter()
        .filter(move |(_, keywords)| keywords.iter().any(|keyword| skill_lower.contains(keyword)))
        .map(|(name, _)| *name)
}
