use std::collections::BTreeMap;

use once_cell::sync::Lazy;

/// One club page: identity, summary, and the long-form involvement text.
/// The `description`, `involvement`, and image `description` fields are
/// author-written prose with embedded `![alt](src)` references and bare
/// URLs; they are the segmenter's main workload.
pub struct Club {
    pub name: &'static str,
    pub logo: &'static str,
    pub website: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub involvement: &'static str,
    pub images: &'static [ClubImage],
}

pub struct ClubImage {
    pub src: &'static str,
    pub caption: &'static str,
    pub description: &'static str,
}

static CLUBS: Lazy<BTreeMap<&'static str, &'static Club>> = Lazy::new(|| {
    let mut clubs = BTreeMap::new();
    clubs.insert("hkn", &HKN);
    clubs.insert("csforeach", &CSFOREACH);
    clubs
});

/// Looks up a club page by slug.
pub fn club(slug: &str) -> Option<&'static Club> {
    CLUBS.get(slug).copied()
}

/// Every club slug, in stable order.
pub fn club_slugs() -> Vec<&'static str> {
    CLUBS.keys().copied().collect()
}

static HKN: Club = Club {
    name: "Eta Kappa Nu (HKN)",
    logo: "/logos/clubs/HKN.png",
    website: "https://hkn.ucsd.edu",
    role: "Member",
    duration: "2023 - 2025",
    description: "IEEE-HKN (Eta Kappa Nu) is the premier international honor society for \
electrical and computer engineers, honoring outstanding students for their academic \
achievement, leadership, and commitment to service.",
    involvement: r#"As a member of Eta Kappa Nu (HKN) at UC San Diego, I progressed from Outreach Volunteer to Professional Outreach Chair and ultimately Vice President of Outreach over the course of 2.5 years.

As Professional Outreach Chair, I coordinated with teachers to host events at 6 distinct elementary, middle, and high schools within socioeconomically disadvantaged communities in the San Diego area. I organized and led 4 UCSD field trips and lab tours, liaising with 12 labs and organizations to present real-world engineering applications to over 80 K-12 students per tour.

As Vice President of Outreach, I led weekly meetings to ensure team accountability, secured a $1,000 grant to support campus tours for a local Title I school, and fostered collaboration between HKN Outreach and other organizations, establishing the largest engineering outreach coalition at UCSD. I successfully oversaw seven UCSD tours serving over 350 students and was asked by the Director of HKN, Nancy Ostin, to be featured in the IEEE Bridge Magazine (shown below).

![The Bridge, Issue 2, 2025](/images/clubs/HKN/Bridge.jpg)

My dedication to fostering diversity and inclusion in engineering was recognized with the 2024 CSE Undergraduate Award for Excellence in Contributions to Diversity.

![2024 CSE Undergraduate Award Winners](/images/clubs/HKN/CSEWinners.jpg)

Outside of my outreach duties, I mentored incoming induction classes and helped organize larger-scale events like Hard Hack, the largest MLH-backed hardware hackathon for college students on the West Coast."#,
    images: &[
        ClubImage {
            src: "/images/clubs/HKN/ANA.png",
            caption: "Army & Navy Academy UCSD Campus Tour",
            description: r#"As a Professional Outreach Chair, I organized a campus tour for the students of Army & Navy Academy to showcase STEM clubs and other educational resources available at UCSD.

Here I am showing them Franklin Antonio Hall, home of the Rocket Propulsion Laboratory and Human Powered Submarine @ UCSD.

Read more about it here: https://tinyurl.com/ANATour24LinkedIn"#,
        },
        ClubImage {
            src: "/images/clubs/HKN/DiversityAward.JPG",
            caption: "2024 CSE Award for Excellence in Contributions to Diversity, Undergraduate",
            description: r#"Honored as one of twenty exceptional undergraduates recognized for achievements beyond academic study. This accolade was awarded for my outstanding contributions to diversity, equity, and inclusion through my position in Eta Kappa Nu's Outreach program.

Read more about it here: https://cse.ucsd.edu/undergraduate/cse-undergraduate-student-awards"#,
        },
        ClubImage {
            src: "/images/clubs/HKN/SLC.jpg",
            caption: "2024 HKN Student Leadership Conference",
            description: r#"In November 2024, I traveled to Charlotte, NC, to represent UC San Diego at the IEEE-Eta Kappa Nu Student Leadership Conference.

As the Vice President of Outreach, this was a pivotal opportunity to connect with a global network of engineering leaders. Over three days, I participated in workshops focused on professional development and chapter management, gaining new perspectives on how to bridge the gap between academic excellence and community impact.

The experience sharpened my ability to lead diverse teams and reinforced the importance of "Scholarship, Character, and Attitude" in the engineering profession."#,
        },
    ],
};

static CSFOREACH: Club = Club {
    name: "CS foreach",
    logo: "/logos/clubs/csforeach.svg",
    website: "https://csforeach.org",
    role: "Volunteer Tutor",
    duration: "2022 - 2024",
    description: r#"CS foreach is dedicated to increasing equity and access in computer science education throughout the San Diego area.

I served as a Developer, an organizer for the largest high school hackathon in San Diego, and the Marketing and Design Director for the organization."#,
    involvement: r#"I joined CS foreach because I didn't want other students to feel the way I did-- underprepared and intimidated by computer science. I started as a workshop volunteer, helping introduce Python and Scratch programming to students who might not otherwise have exposure to these opportunities and concepts.

Recognizing the impact of the club, and its necessity for strong branding, I stepped up as Marketing and Design Director, where I managed our social media presence and designed Figma wireframes for the official website. During this time, I also helped with marketing efforts for TritonHacks 2023, San Diego's largest high school hackathon, helping create a event recap slideshow for social media.

![TritonHacks 2023 Recap](/images/clubs/CSforeach/1.png)

![TritonHacks 2023 Recap](/images/clubs/CSforeach/2.png)

In 2024, I transitioned to a more abstract design role, focusing primarily on TritonHacks. I designed the sponsorship packet, which helped secure partnerships with Teradata, Melissa, Jane Street, and Northrop Grumman. I also developed the event website and crafted the overall brand identity for the event.

![TritonHacks 2025 Sponsorship Packet](/images/clubs/CSforeach/TRITONHACKS 2025.png)

Beyond design, I contributed to hackathon logistics, helping ensure a smooth experience for over 100 participants.

Through CS foreach, I've been able to give back and help ensure that the next generation of students feels prepared, supported, and excited about computer science."#,
    images: &[
        ClubImage {
            src: "/images/clubs/CSforeach/Workshop.JPG",
            caption: "Intro to Web App Design (UI/UX) & Architecture Workshop",
            description: r#"During TritonHacks 2025, the largest high school hackathon in San Diego, I ran a workshop to help students learn how to design and build web applications. I taught students how tools like Uvicorn (FastAPI), MongoDB, and JavaScript work together to create full-stack applications. I then taught students UI/UX design principles and how to design wireframes in Figma.

At the end of the workshop, I did live design critiques of their applications, as well as websites of multi-billion dollar companies."#,
        },
        ClubImage {
            src: "/images/clubs/CSforeach/Mentor.png",
            caption: "TritonHacks 2025 Mentor",
            description: r#"During TritonHacks 2025, I volunteered as a mentor to help students with their hackathon projects, and debug in real-time.

Here, I am drawing out a database schema refactor plan for the student's project, in order to make the database more scalable and efficient."#,
        },
        ClubImage {
            src: "/images/clubs/CSforeach/THLanding.png",
            caption: "TritonHacks 2025 Landing Page",
            description: r#"In collaboration with the TritonHacks 2025 Design Team, I coded the official landing page for the hackathon using React and Netlify for hosting.

This website served as the primary source of information for the hackathon, and was used to register participants, and provide information about the event to over 100+ hackers.

View the website here: https://tritonhacks.org/"#,
        },
    ],
};
