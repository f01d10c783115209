use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use folio_content::{
    Club, ContentError, EDUCATION, EXTRACURRICULARS, JOB_EXPERIENCES, PROFILE, SKILL_GROUPS,
    Thought, ThoughtMeta, club, club_slugs, list_thoughts, load_thought, thought_slugs,
};
use folio_core::{HtmlWriter, escape_attr, escape_html, escape_url_attr, render_prose, render_text};
use folio_shell::{SECTIONS, Theme};

use crate::assets;

pub struct BuildReport {
    pub pages: usize,
}

#[derive(Debug)]
pub enum BuildError {
    Io { path: PathBuf, source: io::Error },
    Content(ContentError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Io { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
            BuildError::Content(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<ContentError> for BuildError {
    fn from(err: ContentError) -> Self {
        BuildError::Content(err)
    }
}

/// Renders the whole site into `out_dir`.
pub fn build_site(content_dir: &Path, out_dir: &Path, theme: Theme) -> Result<BuildReport, BuildError> {
    let thoughts_dir = content_dir.join("thoughts");
    let thoughts = list_thoughts(&thoughts_dir)?;

    let mut pages = 0usize;

    write_file(&out_dir.join("index.html"), &home_page(&thoughts, theme))?;
    pages += 1;

    write_file(
        &out_dir.join("thoughts").join("index.html"),
        &thoughts_index_page(&thoughts, theme),
    )?;
    pages += 1;

    for slug in thought_slugs(&thoughts_dir)? {
        if let Some(thought) = load_thought(&thoughts_dir, &slug)? {
            let path = out_dir.join("thoughts").join(&slug).join("index.html");
            write_file(&path, &thought_page(&thought, theme))?;
            pages += 1;
        }
    }

    for slug in club_slugs() {
        if let Some(entry) = club(slug) {
            let path = out_dir.join("clubs").join(slug).join("index.html");
            write_file(&path, &club_page(entry, theme))?;
            pages += 1;
        }
    }

    let assets_dir = out_dir.join("assets");
    write_file(&assets_dir.join("site.css"), assets::SITE_CSS)?;
    write_file(&assets_dir.join("site.js"), assets::SITE_JS)?;

    Ok(BuildReport { pages })
}

fn write_file(path: &Path, contents: &str) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| BuildError::Io {
            path: parent.to_path_buf(),
            source: err,
        })?;
    }
    fs::write(path, contents).map_err(|err| BuildError::Io {
        path: path.to_path_buf(),
        source: err,
    })
}

fn open_document(writer: &mut HtmlWriter, title: &str, theme: Theme, asset_prefix: &str) {
    writer.line("<!DOCTYPE html>");
    writer.line(&format!(
        "<html lang=\"en\" data-theme=\"{}\">",
        theme.as_str()
    ));
    writer.line("<head>");
    writer.indent();
    writer.line("<meta charset=\"utf-8\" />");
    writer.line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />");
    writer.line(&format!("<title>{}</title>", escape_html(title)));
    writer.line(&format!(
        "<link rel=\"stylesheet\" href=\"{}assets/site.css\" />",
        asset_prefix
    ));
    writer.dedent();
    writer.line("</head>");
    writer.line("<body>");
    writer.indent();
}

fn close_document(writer: &mut HtmlWriter, asset_prefix: &str) {
    writer.line(&format!(
        "<script src=\"{}assets/site.js\"></script>",
        asset_prefix
    ));
    writer.dedent();
    writer.line("</body>");
    writer.line("</html>");
}

fn home_page(thoughts: &[ThoughtMeta], theme: Theme) -> String {
    let mut writer = HtmlWriter::new();
    open_document(&mut writer, PROFILE.name, theme, "");

    writer.line("<nav class=\"rail\" aria-label=\"Sections\">");
    writer.indent();
    for section in SECTIONS {
        writer.line(&format!(
            "<a href=\"#{}\" aria-label=\"Navigate to {}\"></a>",
            section, section
        ));
    }
    writer.dedent();
    writer.line("</nav>");

    writer.line("<main>");
    writer.indent();

    emit_intro(&mut writer);
    emit_education(&mut writer);
    emit_skills(&mut writer);
    emit_work(&mut writer);
    emit_thoughts_preview(&mut writer, thoughts);
    emit_connect(&mut writer);
    emit_footer(&mut writer);

    writer.dedent();
    writer.line("</main>");

    close_document(&mut writer, "");
    writer.finish()
}

fn emit_intro(writer: &mut HtmlWriter) {
    writer.line("<header id=\"intro\" class=\"section\">");
    writer.indent();
    writer.line("<div class=\"kicker\">PORTFOLIO / 2026</div>");
    writer.line(&format!("<h1>{}</h1>", escape_html(PROFILE.name)));
    writer.line(&format!(
        "<img class=\"portrait\" src=\"{}\" alt=\"{}\" />",
        escape_url_attr(PROFILE.portrait),
        escape_attr(PROFILE.name)
    ));
    writer.line(&format!("<p class=\"tagline\">{}</p>", render_text(PROFILE.tagline)));
    writer.line(&format!(
        "<p class=\"status\"><span class=\"dot\"></span>{} · {}</p>",
        escape_html(PROFILE.availability),
        escape_html(PROFILE.location)
    ));
    writer.line("<div class=\"currently\">");
    writer.indent();
    writer.line("<div class=\"kicker\">CURRENTLY</div>");
    writer.line(&format!(
        "<div>{}</div>",
        escape_html(PROFILE.current_role.title)
    ));
    writer.line(&format!(
        "<div class=\"muted\">@ {}</div>",
        escape_html(PROFILE.current_role.company)
    ));
    writer.line(&format!(
        "<div class=\"muted small\">{}</div>",
        escape_html(PROFILE.current_role.period)
    ));
    writer.dedent();
    writer.line("</div>");
    writer.line("<div class=\"kicker\">FOCUS</div>");
    writer.line("<div class=\"chips\">");
    writer.indent();
    for skill in PROFILE.focus {
        writer.line(&format!("<span class=\"chip\">{}</span>", escape_html(skill)));
    }
    writer.dedent();
    writer.line("</div>");
    writer.line(&format!(
        "<a class=\"button\" href=\"{}\" download>Download Resume</a>",
        escape_url_attr(PROFILE.resume)
    ));
    writer.dedent();
    writer.line("</header>");
}

fn emit_education(writer: &mut HtmlWriter) {
    writer.line("<section id=\"education\" class=\"section\">");
    writer.indent();
    writer.line("<h2>Education</h2>");
    for entry in EDUCATION {
        writer.line("<article class=\"entry\">");
        writer.indent();
        writer.line(&format!(
            "<img class=\"logo\" src=\"{}\" alt=\"{}\" />",
            escape_url_attr(entry.logo),
            escape_attr(entry.school)
        ));
        writer.line(&format!("<h3>{}</h3>", escape_html(entry.degree)));
        if let Some(minor) = entry.minor {
            writer.line(&format!("<div class=\"degree\">{}</div>", escape_html(minor)));
        }
        writer.line(&format!("<div class=\"muted\">{}</div>", escape_html(entry.school)));
        writer.line(&format!(
            "<div class=\"muted small\">{}</div>",
            escape_html(entry.period)
        ));
        writer.line(&format!("<p>{}</p>", render_text(entry.description)));
        writer.line("<div class=\"club-links\">");
        writer.indent();
        for link in entry.clubs {
            writer.line(&format!(
                "<a href=\"clubs/{}/\" title=\"My involvement in {}\"><img src=\"{}\" alt=\"{}\" /></a>",
                link.slug,
                escape_attr(link.name),
                escape_url_attr(link.logo),
                escape_attr(link.name)
            ));
        }
        writer.dedent();
        writer.line("</div>");
        writer.dedent();
        writer.line("</article>");
    }
    writer.dedent();
    writer.line("</section>");
}

fn emit_skills(writer: &mut HtmlWriter) {
    writer.line("<section id=\"skills\" class=\"section\">");
    writer.indent();
    writer.line("<h2>Skills</h2>");
    for group in SKILL_GROUPS {
        writer.line(&format!(
            "<div class=\"kicker\">{}</div>",
            escape_html(&group.category.to_uppercase())
        ));
        writer.line("<div class=\"chips\">");
        writer.indent();
        for skill in group.skills {
            writer.line(&format!("<span class=\"chip\">{}</span>", escape_html(skill)));
        }
        writer.dedent();
        writer.line("</div>");
    }
    writer.dedent();
    writer.line("</section>");
}

fn emit_work(writer: &mut HtmlWriter) {
    writer.line("<section id=\"work\" class=\"section\">");
    writer.indent();
    writer.line("<h2>Work Experience</h2>");
    for job in JOB_EXPERIENCES {
        writer.line("<article class=\"entry\">");
        writer.indent();
        writer.line(&format!(
            "<img class=\"logo\" src=\"{}\" alt=\"{}\" />",
            escape_url_attr(job.logo),
            escape_attr(job.company)
        ));
        writer.line(&format!("<h3>{}</h3>", escape_html(job.role)));
        writer.line(&format!("<div class=\"muted\">{}</div>", escape_html(job.company)));
        writer.line(&format!(
            "<div class=\"muted small\">{}</div>",
            escape_html(job.period)
        ));
        writer.line("<div class=\"tags\">");
        writer.indent();
        for tech in job.tech {
            writer.line(&format!("<span>{}</span>", escape_html(tech)));
        }
        writer.dedent();
        writer.line("</div>");
        writer.line(&format!("<p>{}</p>", render_text(job.description)));
        if !job.work_samples.is_empty() {
            writer.line("<div class=\"samples\">");
            writer.indent();
            for sample in job.work_samples {
                writer.line("<figure>");
                writer.indent();
                writer.line(&format!(
                    "<img src=\"{}\" alt=\"{}\" />",
                    escape_url_attr(sample.src),
                    escape_attr(sample.caption)
                ));
                writer.line(&format!(
                    "<figcaption>{}</figcaption>",
                    render_text(sample.caption)
                ));
                writer.dedent();
                writer.line("</figure>");
            }
            writer.dedent();
            writer.line("</div>");
        }
        writer.dedent();
        writer.line("</article>");
    }

    writer.line("<h2>Extracurriculars</h2>");
    for org in EXTRACURRICULARS {
        writer.line("<article class=\"entry\">");
        writer.indent();
        writer.line(&format!(
            "<img class=\"logo\" src=\"{}\" alt=\"{}\" />",
            escape_url_attr(org.logo),
            escape_attr(org.name)
        ));
        writer.line(&format!("<div class=\"muted\">{}</div>", escape_html(org.name)));
        for role in org.roles {
            writer.line("<div class=\"role\">");
            writer.indent();
            writer.line(&format!("<h3>{}</h3>", escape_html(role.role)));
            writer.line(&format!(
                "<div class=\"muted small\">{}</div>",
                escape_html(role.period)
            ));
            writer.line("<div class=\"tags\">");
            writer.indent();
            for tag in role.tags {
                writer.line(&format!("<span>{}</span>", escape_html(tag)));
            }
            writer.dedent();
            writer.line("</div>");
            writer.line(&format!("<p>{}</p>", render_text(role.description)));
            writer.dedent();
            writer.line("</div>");
        }
        writer.line(&format!(
            "<a class=\"button\" href=\"clubs/{}/\">Learn more about my involvement</a>",
            org.slug
        ));
        writer.dedent();
        writer.line("</article>");
    }
    writer.dedent();
    writer.line("</section>");
}

fn emit_thoughts_preview(writer: &mut HtmlWriter, thoughts: &[ThoughtMeta]) {
    writer.line("<section id=\"thoughts\" class=\"section\">");
    writer.indent();
    writer.line("<h2>Recent Thoughts</h2>");
    writer.line("<a class=\"muted\" href=\"thoughts/\">View all</a>");
    writer.line("<div class=\"cards\">");
    writer.indent();
    for thought in thoughts {
        emit_thought_card(writer, thought, "");
    }
    writer.dedent();
    writer.line("</div>");
    writer.dedent();
    writer.line("</section>");
}

fn emit_thought_card(writer: &mut HtmlWriter, thought: &ThoughtMeta, prefix: &str) {
    writer.line(&format!(
        "<a class=\"card\" href=\"{}thoughts/{}/\">",
        prefix, thought.slug
    ));
    writer.indent();
    writer.line(&format!(
        "<div class=\"muted small\">{} · {}</div>",
        thought.date.format("%b %Y"),
        escape_html(&thought.read_time)
    ));
    writer.line(&format!("<h3>{}</h3>", escape_html(&thought.title)));
    writer.line(&format!("<p>{}</p>", escape_html(&thought.excerpt)));
    writer.dedent();
    writer.line("</a>");
}

fn emit_connect(writer: &mut HtmlWriter) {
    writer.line("<section id=\"connect\" class=\"section\">");
    writer.indent();
    writer.line("<h2>Let's Connect</h2>");
    writer.line(
        "<p>Always interested in new opportunities, collaborations, and conversations about \
technology and design.</p>",
    );
    writer.line(&format!(
        "<a href=\"mailto:{}\">{}</a>",
        escape_url_attr(PROFILE.email),
        escape_html(PROFILE.email)
    ));
    writer.line("<div class=\"kicker\">ELSEWHERE</div>");
    writer.line("<div class=\"cards\">");
    writer.indent();
    for social in PROFILE.socials {
        writer.line(&format!(
            "<a class=\"card\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}<span class=\"muted small\">{}</span></a>",
            escape_url_attr(social.url),
            escape_html(social.name),
            escape_html(social.handle)
        ));
    }
    writer.dedent();
    writer.line("</div>");
    writer.dedent();
    writer.line("</section>");
}

fn emit_footer(writer: &mut HtmlWriter) {
    writer.line("<footer>");
    writer.indent();
    writer.line(&format!(
        "<div class=\"muted small\">© 2026 {}. All rights reserved.</div>",
        escape_html(PROFILE.name)
    ));
    writer.line("<button id=\"theme-toggle\" aria-label=\"Toggle theme\">Toggle theme</button>");
    writer.dedent();
    writer.line("</footer>");
}

fn thoughts_index_page(thoughts: &[ThoughtMeta], theme: Theme) -> String {
    let mut writer = HtmlWriter::new();
    open_document(&mut writer, "Thoughts", theme, "../");
    writer.line("<main>");
    writer.indent();
    writer.line("<a class=\"muted\" href=\"../\">Back to Portfolio</a>");
    writer.line("<h1>Thoughts</h1>");
    writer.line("<div class=\"cards\">");
    writer.indent();
    for thought in thoughts {
        emit_thought_card(&mut writer, thought, "../");
    }
    writer.dedent();
    writer.line("</div>");
    writer.dedent();
    writer.line("</main>");
    close_document(&mut writer, "../");
    writer.finish()
}

fn thought_page(thought: &Thought, theme: Theme) -> String {
    let mut writer = HtmlWriter::new();
    open_document(&mut writer, &thought.meta.title, theme, "../../");
    writer.line("<main>");
    writer.indent();
    writer.line("<a class=\"muted\" href=\"../\">Back to Thoughts</a>");
    writer.line("<article>");
    writer.indent();
    writer.line(&format!(
        "<div class=\"muted small\">{} · {}</div>",
        thought.meta.date.format("%b %-d, %Y"),
        escape_html(&thought.meta.read_time)
    ));
    writer.line(&format!("<h1>{}</h1>", escape_html(&thought.meta.title)));
    writer.line(&format!(
        "<p class=\"muted\">{}</p>",
        escape_html(&thought.meta.excerpt)
    ));
    writer.line("<hr />");
    for line in render_prose(&thought.body).lines() {
        writer.line(line);
    }
    writer.line("<hr />");
    writer.line("<a class=\"muted\" href=\"../\">All thoughts</a>");
    writer.dedent();
    writer.line("</article>");
    writer.dedent();
    writer.line("</main>");
    close_document(&mut writer, "../../");
    writer.finish()
}

fn club_page(entry: &Club, theme: Theme) -> String {
    let mut writer = HtmlWriter::new();
    open_document(&mut writer, entry.name, theme, "../../");
    writer.line("<main>");
    writer.indent();
    writer.line("<a class=\"muted\" href=\"../../#education\">Back to Portfolio</a>");
    writer.line(&format!(
        "<img class=\"logo\" src=\"{}\" alt=\"{}\" />",
        escape_url_attr(entry.logo),
        escape_attr(entry.name)
    ));
    writer.line(&format!("<h1>{}</h1>", escape_html(entry.name)));
    writer.line(&format!("<div class=\"muted\">{}</div>", escape_html(entry.role)));
    writer.line(&format!(
        "<div class=\"muted small\">{}</div>",
        escape_html(entry.duration)
    ));
    for line in render_prose(entry.description).lines() {
        writer.line(line);
    }
    writer.line(&format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Visit Official Website</a>",
        escape_url_attr(entry.website)
    ));
    writer.line("<h2>My Involvement</h2>");
    for line in render_prose(entry.involvement).lines() {
        writer.line(line);
    }
    writer.line("<div class=\"samples\">");
    writer.indent();
    for image in entry.images {
        writer.line("<figure>");
        writer.indent();
        writer.line(&format!(
            "<img src=\"{}\" alt=\"{}\" />",
            escape_url_attr(image.src),
            escape_attr(image.caption)
        ));
        writer.line(&format!(
            "<figcaption>{}</figcaption>",
            render_text(image.caption)
        ));
        for line in render_prose(image.description).lines() {
            writer.line(line);
        }
        writer.dedent();
        writer.line("</figure>");
    }
    writer.dedent();
    writer.line("</div>");
    writer.dedent();
    writer.line("</main>");
    close_document(&mut writer, "../../");
    writer.finish()
}
