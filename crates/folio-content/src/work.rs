pub struct JobExperience {
    pub period: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub logo: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    /// Screenshots with captions; captions go through the segmenter when
    /// rendered. Empty when a job has nothing to show.
    pub work_samples: &'static [WorkSample],
}

pub struct WorkSample {
    pub src: &'static str,
    pub caption: &'static str,
}

pub struct Organization {
    pub name: &'static str,
    pub logo: &'static str,
    pub slug: &'static str,
    pub roles: &'static [OrganizationRole],
}

pub struct OrganizationRole {
    pub period: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const JOB_EXPERIENCES: &[JobExperience] = &[
    JobExperience {
        period: "July 2025 - Present",
        role: "Founding Software Engineer",
        company: "ServiceAgent",
        logo: "/logos/companies/ServiceAgent.png",
        description: "Building AI-powered customer service automation tools and designing \
user-centric product interfaces.",
        tech: &[
            "React",
            "TypeScript",
            "PostgreSQL",
            "Tailwind CSS",
            "Node.js (Express)",
            "n8n",
            "Stripe",
            "Hubspot API",
            "Airtable",
        ],
        work_samples: &[
            WorkSample {
                src: "/work-samples/ServiceAgent/serviceagent_landing.png",
                caption: "ServiceAgent - Landing Page (Light Mode)",
            },
            WorkSample {
                src: "/work-samples/ServiceAgent/pricing-cards.png",
                caption: "ServiceAgent - Pricing Cards (Dark Mode)",
            },
            WorkSample {
                src: "/work-samples/ServiceAgent/hiring-dashboard.png",
                caption: "ServiceAgent - Hiring Dashboard (Light Mode)",
            },
        ],
    },
    JobExperience {
        period: "June 2024 - Sep 2024",
        role: "Frontend Engineer Intern and Technical Lead",
        company: "Pullscription",
        logo: "/logos/companies/Pullscription.png",
        description: "Built and led the frontend for Pullscription, a platform that lets users \
discover and pull comics from local comic shops digitally, focusing on scalable architecture, \
secure authentication, and performance optimization.",
        tech: &[
            "Vue",
            "TypeScript",
            "Nuxt.js",
            "OAuth 2.0",
            "Docker",
            "Postman",
            "State Management",
            "MapKit JS",
        ],
        work_samples: &[
            WorkSample {
                src: "/work-samples/Pullscription/ps-landing.png",
                caption: "Pullscription - Landing Page",
            },
            WorkSample {
                src: "/work-samples/Pullscription/pullcard1.png",
                caption: "Pullscription - Default Comic Card (Mobile)",
            },
            WorkSample {
                src: "/work-samples/Pullscription/pullcard2.png",
                caption: "Pullscription - Active Comic Card (Desktop)",
            },
            WorkSample {
                src: "/work-samples/Pullscription/NavBar.png",
                caption: "Pullscription - Navigation Bar (Mobile)",
            },
        ],
    },
    JobExperience {
        period: "Nov 2023 - June 2024",
        role: "Computational Biology and Python Mentor",
        company: "inventXYZ",
        logo: "/logos/companies/inventXYZ.png",
        description: "Mentored students at inventXYZ in computational biology, guiding them \
through genomic concepts, algorithmic thinking, and real-world applications of data-driven \
biology using Python. Also led a project that visualized US party affiliation trends over time \
in Tableau.",
        tech: &["Python", "Tableau"],
        work_samples: &[],
    },
];

pub const EXTRACURRICULARS: &[Organization] = &[
    Organization {
        name: "IEEE - Eta Kappa Nu (HKN) Honors Society",
        logo: "/logos/clubs/HKN.png",
        slug: "hkn",
        roles: &[
            OrganizationRole {
                period: "June 2024 - June 2025",
                role: "Vice President of Outreach",
                description: "Oversaw a team of 10+ outreach coordinators to deliver campus \
tours and STEM lessons for 500+ underserved students, secured funding, and established UCSD's \
largest engineering outreach coalition.",
                tags: &["Leadership", "Team Management", "Event Planning"],
            },
            OrganizationRole {
                period: "Mar 2023 - June 2024",
                role: "Professional Outreach Chair",
                description: "Coordinated with educators to host STEM events at 6 schools in \
underserved San Diego communities and organized 4 UCSD field trips, partnering with 12 labs to \
engage 80+ K-12 students per tour in hands-on engineering experiences.",
                tags: &[
                    "Event Planning",
                    "Partnership Development",
                    "Community Engagement",
                    "Public Speaking",
                ],
            },
            OrganizationRole {
                period: "Jan 2023 - Mar 2023",
                role: "Guest STEM Instructor",
                description: "Collaborated with a team of student instructors to teach Web \
Development and AI concepts to K-12 students.",
                tags: &["Teaching", "Curriculum Development", "Mentorship"],
            },
        ],
    },
    Organization {
        name: "CS foreach",
        logo: "/logos/clubs/csfe-circle.png",
        slug: "csforeach",
        roles: &[
            OrganizationRole {
                period: "June 2024 - June 2025",
                role: "React Developer and Hackathon Organizer",
                description: "Co-organized San Diego's largest high school hackathon, designing \
the website, sponsorship materials, and brand identity to attract 100+ participants.",
                tags: &[
                    "React",
                    "Figma",
                    "Netlify",
                    "Event Organization",
                    "Brand Identity",
                    "Sponsorship Outreach",
                ],
            },
            OrganizationRole {
                period: "Apr 2023 - June 2024",
                role: "Marketing and Design Director",
                description: "Led marketing and design initiatives, managing social media and \
designing the official website to expand CS foreach's reach to underserved students.",
                tags: &["Figma", "Wireframes", "Social Media", "Adobe Photoshop"],
            },
        ],
    },
];
