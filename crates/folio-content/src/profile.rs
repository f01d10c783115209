/// The site owner's identity and intro copy.
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
    pub portrait: &'static str,
    pub resume: &'static str,
    pub current_role: CurrentRole,
    pub focus: &'static [&'static str],
    pub email: &'static str,
    pub socials: &'static [Social],
}

pub struct CurrentRole {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
}

pub struct Social {
    pub name: &'static str,
    pub handle: &'static str,
    pub url: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Om Rabadia",
    tagline: "Developer and designer building intuitive web experiences that make \
technology more accessible and impactful for everyone.",
    location: "San Diego, CA",
    availability: "Available for work",
    portrait: "/Profile_Pic.jpg",
    resume: "/OmRabadia_Resume.pdf",
    current_role: CurrentRole {
        title: "Founding Software Engineer",
        company: "ServiceAgent",
        period: "July 2025 — Present",
    },
    focus: &[
        "Full-Stack Development",
        "Automation",
        "API Integration",
        "UI/UX Design",
    ],
    email: "orrabadia@gmail.com",
    socials: &[
        Social {
            name: "GitHub",
            handle: "@orrabadia",
            url: "https://github.com/orrabadia",
        },
        Social {
            name: "LinkedIn",
            handle: "omrabadia",
            url: "https://www.linkedin.com/in/omrabadia",
        },
    ],
};
