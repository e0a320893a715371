//! Built-in catalog used when the stored catalog is empty or unreachable.
//!
//! A fresh `Vec` is built on every call so callers never share or mutate a
//! process-wide default.

use crate::recommendation::models::CareerProfile;

const INNOVATE: &str = "Innovate and create new technologies";
const ANALYZE: &str = "Analyze data and solve complex problems";
const EXPRESS: &str = "Express creativity and design";
const HELP: &str = "Help people and improve communities";
const LEAD: &str = "Lead and manage projects/teams";

struct Seed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    skills_needed: &'static [&'static str],
    average_salary_usd: u64,
    interests: &'static [&'static str],
    work_environment: &'static [&'static str],
    impact_areas: &'static [&'static str],
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "cp1",
        name: "Software Engineer",
        description: "Develops software applications, focusing on logic and problem-solving.",
        skills_needed: &["Python", "Java", "Algorithms", "Problem Solving"],
        average_salary_usd: 120_000,
        interests: &["Math", "Science", "Problem Solving"],
        work_environment: &["Independent", "Collaborative"],
        impact_areas: &[INNOVATE, ANALYZE],
    },
    Seed {
        id: "cp2",
        name: "Data Scientist",
        description: "Analyzes large datasets to extract insights and build predictive models.",
        skills_needed: &["Statistics", "Machine Learning", "SQL", "Python/R"],
        average_salary_usd: 135_000,
        interests: &["Math", "Science", "Problem Solving"],
        work_environment: &["Independent", "Collaborative"],
        impact_areas: &[ANALYZE, INNOVATE],
    },
    Seed {
        id: "cp3",
        name: "UI/UX Designer",
        description: "Designs user interfaces and experiences, focusing on creativity and user empathy.",
        skills_needed: &["Figma", "User Research", "Prototyping", "Creativity"],
        average_salary_usd: 110_000,
        interests: &["Arts", "Creative"],
        work_environment: &["Collaborative", "Dynamic"],
        impact_areas: &[EXPRESS, HELP],
    },
    Seed {
        id: "cp4",
        name: "Digital Marketing Specialist",
        description: "Plans and executes digital marketing campaigns, requiring creativity and social interaction.",
        skills_needed: &["SEO", "Content Marketing", "Social Media", "Analytics"],
        average_salary_usd: 75_000,
        interests: &["Arts", "Social"],
        work_environment: &["Dynamic", "Collaborative"],
        impact_areas: &[EXPRESS, LEAD],
    },
    Seed {
        id: "cp5",
        name: "Financial Analyst",
        description: "Evaluates financial data and advises on investments, requiring strong analytical skills.",
        skills_needed: &["Excel", "Financial Modeling", "Economics", "Attention to Detail"],
        average_salary_usd: 90_000,
        interests: &["Math", "Problem Solving"],
        work_environment: &["Independent", "Collaborative"],
        impact_areas: &[ANALYZE],
    },
    Seed {
        id: "cp6",
        name: "Biomedical Researcher",
        description: "Conducts scientific research to develop new medical treatments and technologies.",
        skills_needed: &["Biology", "Chemistry", "Research Methods", "Lab Skills"],
        average_salary_usd: 100_000,
        interests: &["Science", "Problem Solving"],
        work_environment: &["Independent", "Collaborative"],
        impact_areas: &[INNOVATE, HELP],
    },
    Seed {
        id: "cp7",
        name: "Content Writer",
        description: "Creates engaging written content for various platforms, demanding creativity and strong communication.",
        skills_needed: &["Writing", "Editing", "Research", "Creativity"],
        average_salary_usd: 60_000,
        interests: &["Arts", "Creative"],
        work_environment: &["Independent", "Dynamic"],
        impact_areas: &[EXPRESS],
    },
    Seed {
        id: "cp8",
        name: "Social Worker",
        description: "Helps individuals and families cope with challenges, requiring strong social and empathetic skills.",
        skills_needed: &["Empathy", "Communication", "Problem Solving", "Crisis Intervention"],
        average_salary_usd: 55_000,
        interests: &["Social"],
        work_environment: &["Dynamic", "Collaborative"],
        impact_areas: &[HELP],
    },
    Seed {
        id: "cp9",
        name: "Environmental Scientist",
        description: "Investigates environmental problems and develops solutions for conservation and sustainability.",
        skills_needed: &["Ecology", "Chemistry", "Data Analysis", "Fieldwork"],
        average_salary_usd: 80_000,
        interests: &["Science", "Problem Solving"],
        work_environment: &["Independent", "Dynamic"],
        impact_areas: &[ANALYZE, HELP],
    },
    Seed {
        id: "cp10",
        name: "Game Developer",
        description: "Designs and programs video games, blending technical skills with creative vision.",
        skills_needed: &["Programming (C++/C#)", "Game Design", "Graphics", "Problem Solving", "Creativity"],
        average_salary_usd: 95_000,
        interests: &["Math", "Science", "Creative", "Problem Solving"],
        work_environment: &["Collaborative", "Dynamic"],
        impact_areas: &[INNOVATE, EXPRESS],
    },
    Seed {
        id: "cp11",
        name: "Architect",
        description: "Plans and designs buildings and other structures, combining artistic vision with engineering principles.",
        skills_needed: &["Drafting", "Design Software (CAD)", "Problem Solving", "Creativity", "Physics"],
        average_salary_usd: 90_000,
        interests: &["Arts", "Math", "Problem Solving", "Creative"],
        work_environment: &["Independent", "Collaborative"],
        impact_areas: &[EXPRESS, INNOVATE],
    },
    Seed {
        id: "cp12",
        name: "Journalist",
        description: "Researches, writes, and reports news stories, requiring strong communication and social skills.",
        skills_needed: &["Writing", "Research", "Interviewing", "Communication", "Social"],
        average_salary_usd: 50_000,
        interests: &["Arts", "Social"],
        work_environment: &["Dynamic", "Independent"],
        impact_areas: &[HELP],
    },
    Seed {
        id: "cp13",
        name: "Mechanical Engineer",
        description: "Designs, develops, builds, and tests mechanical devices and systems.",
        skills_needed: &["Physics", "Math", "CAD", "Problem Solving", "Design"],
        average_salary_usd: 98_000,
        interests: &["Science", "Math", "Problem Solving"],
        work_environment: &["Independent", "Collaborative"],
        impact_areas: &[INNOVATE, ANALYZE],
    },
    Seed {
        id: "cp14",
        name: "Graphic Designer",
        description: "Creates visual concepts using computer software or by hand, to communicate ideas that inspire, inform, or captivate consumers.",
        skills_needed: &["Adobe Creative Suite", "Typography", "Color Theory", "Creativity"],
        average_salary_usd: 65_000,
        interests: &["Arts", "Creative"],
        work_environment: &["Independent", "Collaborative"],
        impact_areas: &[EXPRESS],
    },
    Seed {
        id: "cp15",
        name: "Teacher",
        description: "Educates students in various subjects, requiring strong communication and social skills.",
        skills_needed: &["Communication", "Patience", "Subject Matter Expertise", "Social"],
        average_salary_usd: 60_000,
        interests: &["Social"],
        work_environment: &["Collaborative", "Dynamic"],
        impact_areas: &[HELP, LEAD],
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Returns the 15-profile fallback catalog (`cp1`..`cp15`).
pub fn fallback_catalog() -> Vec<CareerProfile> {
    SEEDS
        .iter()
        .map(|seed| CareerProfile {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            skills_needed: owned(seed.skills_needed),
            average_salary_usd: seed.average_salary_usd,
            interests: owned(seed.interests),
            work_environment: owned(seed.work_environment),
            impact_areas: Some(owned(seed.impact_areas)),
        })
        .collect()
}
