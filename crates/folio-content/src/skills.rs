pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: "Languages",
        skills: &[
            "Python",
            "JavaScript",
            "TypeScript",
            "Java",
            "C/C++",
            "SQL",
            "HTML",
            "CSS",
            "Bash",
        ],
    },
    SkillGroup {
        category: "Frameworks & Libraries",
        skills: &[
            "React",
            "Next.js",
            "Vue",
            "Nuxt.js",
            "Node.js",
            "Express",
            "Tailwind CSS",
            "FastAPI",
        ],
    },
    SkillGroup {
        category: "Databases & Cloud",
        skills: &["MongoDB", "PostgreSQL", "Supabase"],
    },
    SkillGroup {
        category: "Tools & Integrations",
        skills: &[
            "Git",
            "Docker",
            "GitHub Actions",
            "Auth0",
            "Stripe",
            "HubSpot",
            "Airtable",
            "OpenAI APIs",
        ],
    },
    SkillGroup {
        category: "Debugging & Testing Tools",
        skills: &["Vitest", "JUnit", "gdb", "Valgrind"],
    },
];
