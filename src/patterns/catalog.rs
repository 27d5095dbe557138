//! Keyword and pattern tables. Pure data: adding a family or a keyword here
//! is picked up by every extractor without further changes.

use super::{ActionVerbTiers, KeywordFamily, PatternCategory, SynonymEntry};

pub(super) const TECHNICAL_SKILLS: &[KeywordFamily] = &[
    KeywordFamily {
        name: "frontend",
        keywords: &[
            "react", "angular", "vue", "svelte", "html", "css", "sass", "tailwind", "redux",
            "next.js", "webpack", "jquery",
        ],
    },
    KeywordFamily {
        name: "backend",
        keywords: &[
            "node.js", "express", "django", "flask", "fastapi", "spring boot", "spring", "rails",
            "laravel", "graphql", "rest api", "microservices", ".net",
        ],
    },
    KeywordFamily {
        name: "languages",
        keywords: &[
            "javascript", "typescript", "python", "java", "c++", "c#", "golang", "rust", "ruby",
            "php", "kotlin", "swift", "scala", "sql",
        ],
    },
    KeywordFamily {
        name: "databases",
        keywords: &[
            "postgresql", "mysql", "mongodb", "redis", "sqlite", "oracle", "dynamodb",
            "cassandra", "elasticsearch", "sql server",
        ],
    },
    KeywordFamily {
        name: "cloud",
        keywords: &[
            "aws", "azure", "gcp", "google cloud", "lambda", "s3", "ec2", "cloudformation",
            "serverless",
        ],
    },
    KeywordFamily {
        name: "devops",
        keywords: &[
            "docker", "kubernetes", "terraform", "ansible", "jenkins", "ci/cd", "github actions",
            "gitlab ci", "linux", "nginx",
        ],
    },
    KeywordFamily {
        name: "data_science",
        keywords: &[
            "machine learning", "deep learning", "tensorflow", "pytorch", "pandas", "numpy",
            "scikit-learn", "spark", "tableau", "power bi", "data analysis", "statistics",
        ],
    },
    KeywordFamily {
        name: "mobile",
        keywords: &["android", "ios", "react native", "flutter", "swiftui", "xamarin"],
    },
    KeywordFamily {
        name: "tools",
        keywords: &[
            "git", "github", "gitlab", "jira", "confluence", "figma", "postman", "excel",
        ],
    },
];

pub(super) const SOFT_SKILLS: &[KeywordFamily] = &[
    KeywordFamily {
        name: "leadership",
        keywords: &[
            "leadership", "mentoring", "team lead", "coaching", "decision making", "delegation",
        ],
    },
    KeywordFamily {
        name: "communication",
        keywords: &[
            "communication", "presentation", "public speaking", "technical writing",
            "negotiation", "storytelling",
        ],
    },
    KeywordFamily {
        name: "analytical",
        keywords: &[
            "problem solving", "problem-solving", "critical thinking", "analytical", "research",
            "troubleshooting", "data-driven",
        ],
    },
    KeywordFamily {
        name: "project_management",
        keywords: &[
            "project management", "agile", "scrum", "kanban", "stakeholder management",
            "roadmap", "budgeting",
        ],
    },
    KeywordFamily {
        name: "interpersonal",
        keywords: &[
            "collaboration", "teamwork", "empathy", "adaptability", "conflict resolution",
            "customer service",
        ],
    },
];

pub(super) const INDUSTRY_TERMS: &[KeywordFamily] = &[
    KeywordFamily {
        name: "finance",
        keywords: &[
            "financial modeling", "risk management", "compliance", "banking", "investment",
            "accounting", "fintech", "portfolio", "audit", "trading",
        ],
    },
    KeywordFamily {
        name: "healthcare",
        keywords: &[
            "hipaa", "patient care", "clinical", "ehr", "medical", "healthcare",
            "pharmaceutical", "telehealth",
        ],
    },
    KeywordFamily {
        name: "education",
        keywords: &[
            "curriculum", "pedagogy", "e-learning", "lms", "instructional design",
            "student outcomes", "k-12",
        ],
    },
    KeywordFamily {
        name: "retail",
        keywords: &[
            "e-commerce", "ecommerce", "merchandising", "inventory management", "point of sale",
            "supply chain", "omnichannel", "customer experience",
        ],
    },
    KeywordFamily {
        name: "manufacturing",
        keywords: &[
            "lean manufacturing", "six sigma", "quality control", "iso 9001",
            "production planning", "cad", "plc", "kaizen",
        ],
    },
];

pub(super) const BUZZWORDS: &[KeywordFamily] = &[
    KeywordFamily {
        name: "overused",
        keywords: &[
            "team player", "hard worker", "hardworking", "detail-oriented", "detail oriented",
            "results-driven", "results driven", "self-starter", "go-getter", "highly motivated",
        ],
    },
    KeywordFamily {
        name: "cliche",
        keywords: &[
            "think outside the box", "hit the ground running", "go above and beyond",
            "passionate", "dynamic", "proven track record", "rockstar", "ninja",
        ],
    },
    KeywordFamily {
        name: "vague",
        keywords: &[
            "various", "several projects", "many tasks", "etc", "worked on", "and more",
        ],
    },
    KeywordFamily {
        name: "corporate_speak",
        keywords: &[
            "synergy", "synergize", "leverage", "paradigm shift", "best of breed", "value add",
            "move the needle", "circle back", "thought leader", "low-hanging fruit",
        ],
    },
    KeywordFamily {
        name: "redundant",
        keywords: &[
            "references available upon request", "past experience", "end result",
            "completely finished", "future plans", "duties included",
        ],
    },
];

pub(super) const ACTION_VERBS: ActionVerbTiers = ActionVerbTiers {
    high_impact: &[
        "increased", "reduced", "generated", "saved", "improved", "accelerated", "delivered",
        "achieved", "exceeded", "boosted", "grew", "doubled", "tripled", "maximized",
        "transformed", "cut", "decreased",
    ],
    medium_impact: &[
        "developed", "implemented", "created", "designed", "built", "launched", "established",
        "optimized", "streamlined", "automated", "engineered", "redesigned", "deployed",
        "migrated", "integrated",
    ],
    low_impact: &[
        "helped", "assisted", "worked", "participated", "handled", "supported", "involved",
        "contributed", "maintained", "responsible",
    ],
    leadership: &[
        "led", "managed", "directed", "mentored", "supervised", "coordinated", "spearheaded",
        "oversaw", "headed", "orchestrated",
    ],
};

pub(super) const IMPACT_PATTERNS: &[PatternCategory] = &[
    PatternCategory {
        name: "leadership",
        patterns: &[
            r"\b(?:led|managed|directed|supervised|mentored|headed|oversaw)\b",
            r"\bteam of \d+",
            r"\b(?:hired|coached)\b",
        ],
    },
    PatternCategory {
        name: "achievement",
        patterns: &[
            r"\b(?:achieved|exceeded|surpassed|awarded|won|earned)\b",
            r"\b(?:increased|improved|reduced|decreased|grew|boosted|saved)\b",
        ],
    },
    PatternCategory {
        name: "technical",
        patterns: &[
            r"\b(?:developed|engineered|architected|implemented|built|designed|programmed|deployed|migrated)\b",
        ],
    },
    PatternCategory {
        name: "innovation",
        patterns: &[
            r"\b(?:pioneered|innovated|launched|introduced|invented|transformed|initiated|founded)\b",
            r"\bpatent(?:s|ed)?\b",
        ],
    },
    PatternCategory {
        name: "collaboration",
        patterns: &[
            r"\b(?:collaborated|partnered|coordinated|cooperated|liaised)\b",
            r"\bcross[- ]functional\b",
            r"\bstakeholders?\b",
        ],
    },
];

pub(super) const BUSINESS_KEYWORDS: &[&str] = &[
    "revenue", "sales", "profit", "profits", "cost", "costs", "efficiency", "productivity",
    "performance", "users", "customers", "clients", "growth", "conversion", "retention",
    "engagement", "satisfaction", "latency", "throughput", "uptime", "savings", "roi",
    "budget", "market share", "traffic", "downloads", "accuracy", "load time",
    "response time", "errors", "defects", "incidents", "turnaround", "adoption", "signups",
    "subscribers", "pipeline", "margin",
];

pub(super) const SEMANTIC_SYNONYMS: &[SynonymEntry] = &[
    SynonymEntry {
        term: "javascript",
        related: &["node.js", "react", "typescript", "vue", "angular"],
    },
    SynonymEntry {
        term: "react",
        related: &["react native", "next.js", "nextjs"],
    },
    SynonymEntry {
        term: "node.js",
        related: &["nodejs", "express", "nestjs"],
    },
    SynonymEntry {
        term: "python",
        related: &["django", "flask", "fastapi", "pandas"],
    },
    SynonymEntry {
        term: "aws",
        related: &["amazon web services", "ec2", "s3", "lambda"],
    },
    SynonymEntry {
        term: "gcp",
        related: &["google cloud"],
    },
    SynonymEntry {
        term: "kubernetes",
        related: &["k8s", "eks", "gke"],
    },
    SynonymEntry {
        term: "postgresql",
        related: &["postgres"],
    },
    SynonymEntry {
        term: "sql",
        related: &["mysql", "postgresql", "postgres", "sqlite", "sql server"],
    },
    SynonymEntry {
        term: "machine learning",
        related: &["tensorflow", "pytorch", "scikit-learn", "deep learning"],
    },
    SynonymEntry {
        term: "ci/cd",
        related: &["jenkins", "github actions", "gitlab ci", "circleci"],
    },
    SynonymEntry {
        term: "bachelor",
        related: &["bs", "b.s", "ba", "b.a", "bsc", "b.sc", "undergraduate degree"],
    },
    SynonymEntry {
        term: "master",
        related: &["ms", "m.s", "msc", "m.sc", "mba"],
    },
    SynonymEntry {
        term: "phd",
        related: &["ph.d", "doctorate", "doctoral"],
    },
    SynonymEntry {
        term: "communication",
        related: &["presented", "presentation", "public speaking"],
    },
    SynonymEntry {
        term: "leadership",
        related: &["led", "managed", "mentored"],
    },
    SynonymEntry {
        term: "project management",
        related: &["scrum", "agile", "pmp", "kanban"],
    },
];

pub(super) const CRITICALITY_MARKERS: &[&str] = &[
    "required",
    "must have",
    "must-have",
    "essential",
    "mandatory",
    "minimum",
    "years of experience",
];

pub(super) const EXPERIENCE_YEARS_PATTERN: &str =
    r"(\d{1,2})\+?\s*(?:-\s*\d{1,2}\s*)?(?:years?|yrs?)\b";

pub(super) const EDUCATION_PATTERN: &str =
    r"\b(bachelor(?:'s)?|master(?:'s)?|ph\.?d|doctorate|mba)\b";

pub(super) const SECTION_HEADERS: &[(&str, &[&str])] = &[
    (
        "experience",
        &[
            "experience",
            "work experience",
            "professional experience",
            "employment",
            "employment history",
            "work history",
        ],
    ),
    ("education", &["education", "academic background", "qualifications"]),
    (
        "skills",
        &["skills", "technical skills", "core competencies", "competencies", "expertise"],
    ),
];

pub(super) const SENIORITY_MARKERS: &[&str] = &[
    "intern", "junior", "associate", "senior", "lead", "principal", "staff", "manager",
    "director", "head of", "vice president", "vp", "chief",
];

pub(super) const EXPERTISE_INDICATORS: &[&str] = &[
    "expert", "advanced", "proficient", "intermediate", "fluent", "certified",
    "certification", "years of experience", "specialist",
];

pub(super) const TECHNICAL_ROLE_MARKERS: &[&str] = &[
    "engineer", "developer", "programmer", "software", "devops", "data scientist",
    "architect", "sre", "full stack", "full-stack", "frontend", "backend", "machine learning",
];

pub(super) const DUTY_PHRASES: &[&str] = &["responsible for", "duties included", "tasked with"];

pub(super) const POSITIVE_INDICATORS: &[&str] = &[
    "strong", "excellent", "impressive", "well-structured", "well structured", "effective",
    "clear", "solid", "compelling", "outstanding",
];

pub(super) const NEGATIVE_INDICATORS: &[&str] = &[
    "weak", "lacks", "lacking", "missing", "poor", "vague", "unclear", "generic",
    "needs improvement", "insufficient",
];
