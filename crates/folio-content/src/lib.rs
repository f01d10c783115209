mod clubs;
mod education;
mod profile;
mod skills;
mod thoughts;
mod work;

pub use clubs::{Club, ClubImage, club, club_slugs};
pub use education::{ClubLink, Education, EDUCATION};
pub use profile::{CurrentRole, PROFILE, Profile, Social};
pub use skills::{SKILL_GROUPS, SkillGroup};
pub use thoughts::{
    ContentError, Thought, ThoughtMeta, list_thoughts, load_thought, thought_slugs,
};
pub use work::{
    EXTRACURRICULARS, JOB_EXPERIENCES, JobExperience, Organization, OrganizationRole, WorkSample,
};
