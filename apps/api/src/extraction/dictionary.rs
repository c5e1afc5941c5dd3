pub const TECHNICAL_SKILLS: &[&str] = &[
    // Programming languages
    "python",
    "java",
    "javascript",
    "typescript",
    "c++",
    "c#",
    "go",
    "rust",
    "kotlin",
    "swift",
    "php",
    "ruby",
    "scala",
    "r",
    "matlab",
    "perl",
    "shell",
    "bash",
    "powershell",
    // Web
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "django",
    "flask",
    "spring",
    "asp.net",
    "laravel",
    "rails",
    "next.js",
    "nuxt.js",
    // Databases
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "oracle",
    "sqlite",
    "cassandra",
    "elasticsearch",
    "dynamodb",
    "neo4j",
    // Cloud & DevOps
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "jenkins",
    "git",
    "ci/cd",
    "terraform",
    "ansible",
    "chef",
    "puppet",
    "linux",
    "unix",
    // Data science & ML
    "machine learning",
    "deep learning",
    "tensorflow",
    "pytorch",
    "keras",
    "scikit-learn",
    "pandas",
    "numpy",
    "matplotlib",
    "seaborn",
    "jupyter",
    "data analysis",
    "natural language processing",
    "nlp",
    "computer vision",
    "neural networks",
    // Mobile
    "android",
    "ios",
    "react native",
    "flutter",
    "xamarin",
    // Tooling & process
    "github",
    "gitlab",
    "jira",
    "confluence",
    "agile",
    "scrum",
    "kanban",
    "rest api",
    "graphql",
    "microservices",
    "api development",
];

pub const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "critical thinking",
    "project management",
    "time management",
    "collaboration",
    "adaptability",
    "creativity",
    "analytical thinking",
    "attention to detail",
    "multitasking",
];

/// Header keywords that open an explicit skills section.
pub const SECTION_HEADERS: &[&str] = &["skills", "competencies", "proficiencies"];

/// Separators used inside a skills section. Leading bullet dashes are
/// stripped by the normalizer instead, so hyphenated names survive.
pub const SECTION_DELIMITERS: &[char] = &[',', ';', '|', '•'];

pub fn all_skills() -> impl Iterator<Item = &'static str> {
    TECHNICAL_SKILLS.iter().chain(SOFT_SKILLS).copied()
}
