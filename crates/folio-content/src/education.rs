pub struct Education {
    pub period: &'static str,
    pub degree: &'static str,
    pub minor: Option<&'static str>,
    pub school: &'static str,
    pub logo: &'static str,
    pub description: &'static str,
    pub clubs: &'static [ClubLink],
}

/// A small logo link from an education entry to a club page.
pub struct ClubLink {
    pub name: &'static str,
    pub logo: &'static str,
    pub slug: &'static str,
}

pub const EDUCATION: &[Education] = &[Education {
    period: "2021 - 2025",
    degree: "B.S. Computer Science with a Specialization in Bioinformatics",
    minor: Some("Minor in Economics"),
    school: "University of California, San Diego",
    logo: "/UCSD.png",
    description: "Focusing on software engineering, algorithms, and human-computer interaction.",
    clubs: &[
        ClubLink {
            name: "HKN",
            logo: "/logos/clubs/HKN.png",
            slug: "hkn",
        },
        ClubLink {
            name: "CS Foreach",
            logo: "/logos/clubs/csforeach.svg",
            slug: "csforeach",
        },
    ],
}];
