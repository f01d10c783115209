/// Shared stylesheet written once into `assets/`. Light is the base; dark
/// swaps the custom properties when `data-theme="dark"` is set on the root
/// element (by the build flag or the toggle script).
pub const SITE_CSS: &str = r#":root {
  --background: #ffffff;
  --foreground: #171717;
  --muted: #6b7280;
  --border: #e5e7eb;
  --card: #fafafa;
}

[data-theme="dark"] {
  --background: #0a0a0a;
  --foreground: #ededed;
  --muted: #9ca3af;
  --border: #27272a;
  --card: #111113;
}

* {
  box-sizing: border-box;
}

body {
  margin: 0;
  background: var(--background);
  color: var(--foreground);
  font-family: ui-sans-serif, system-ui, sans-serif;
  line-height: 1.6;
}

main {
  max-width: 56rem;
  margin: 0 auto;
  padding: 3rem 1.5rem;
}

h1,
h2,
h3 {
  font-weight: 300;
  letter-spacing: -0.01em;
}

a {
  color: inherit;
}

.kicker {
  font-family: ui-monospace, monospace;
  font-size: 0.75rem;
  letter-spacing: 0.1em;
  color: var(--muted);
  margin-top: 1.5rem;
}

.muted {
  color: var(--muted);
}

.small {
  font-size: 0.85rem;
}

.section {
  padding: 3rem 0;
}

.entry {
  border-bottom: 1px solid var(--border);
  padding: 1.5rem 0;
}

.logo,
.portrait {
  object-fit: contain;
}

.logo {
  width: 3.5rem;
  height: 3.5rem;
}

.portrait {
  width: 10rem;
  height: 10rem;
  border-radius: 9999px;
  border: 2px solid var(--border);
  object-fit: cover;
}

.chips {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.chip {
  border: 1px solid var(--border);
  border-radius: 9999px;
  padding: 0.2rem 0.75rem;
  font-size: 0.8rem;
}

.tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.25rem 0.75rem;
  font-size: 0.75rem;
  color: var(--muted);
}

.cards {
  display: grid;
  gap: 1.5rem;
  grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
}

.card {
  display: block;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  padding: 1.5rem;
  text-decoration: none;
  background: var(--card);
}

.card:hover {
  border-color: var(--muted);
}

.button {
  display: inline-block;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  padding: 0.5rem 1rem;
  text-decoration: none;
  margin-top: 1rem;
}

.rail {
  position: fixed;
  left: 2rem;
  top: 50%;
  transform: translateY(-50%);
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.rail a {
  width: 0.5rem;
  height: 2rem;
  border-radius: 9999px;
  background: var(--border);
}

.rail a:hover {
  background: var(--muted);
}

.dot {
  display: inline-block;
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
  background: #22c55e;
  margin-right: 0.5rem;
}

.samples figure {
  margin: 1.5rem 0;
}

.samples img {
  max-width: 100%;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
}

.samples figcaption {
  font-size: 0.85rem;
  color: var(--muted);
  text-align: center;
}

.Folio-inline-link {
  text-decoration: underline;
  text-underline-offset: 4px;
}

.Folio-inline-image {
  display: inline-block;
  max-width: 100%;
  height: auto;
  border-radius: 0.25rem;
  margin: 0.5rem 0;
}

footer {
  border-top: 1px solid var(--border);
  padding: 3rem 0;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

#theme-toggle {
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  background: none;
  color: inherit;
  padding: 0.5rem 0.75rem;
  cursor: pointer;
}
"#;

/// Shared page script: theme toggle persistence, stop-propagation for
/// inline links and images, and digit-key section navigation.
pub const SITE_JS: &str = r#"(function () {
  var root = document.documentElement;
  var stored = null;
  try {
    stored = localStorage.getItem("folio-theme");
  } catch (err) {}
  if (stored === "light" || stored === "dark") {
    root.setAttribute("data-theme", stored);
  }

  var toggle = document.getElementById("theme-toggle");
  if (toggle) {
    toggle.addEventListener("click", function () {
      var next = root.getAttribute("data-theme") === "dark" ? "light" : "dark";
      root.setAttribute("data-theme", next);
      try {
        localStorage.setItem("folio-theme", next);
      } catch (err) {}
    });
  }

  // Inline links and images must not trigger enclosing click handlers.
  document.addEventListener(
    "click",
    function (event) {
      if (!event.target.closest) return;
      var inline = event.target.closest(".Folio-inline-link, .Folio-inline-image");
      if (inline) event.stopPropagation();
    },
    true
  );

  var sections = ["intro", "education", "skills", "work", "thoughts", "connect"];
  document.addEventListener("keydown", function (event) {
    if (event.target instanceof HTMLInputElement || event.target instanceof HTMLTextAreaElement) {
      return;
    }
    var key = parseInt(event.key, 10);
    if (key >= 1 && key <= sections.length) {
      var section = document.getElementById(sections[key - 1]);
      if (section) section.scrollIntoView({ behavior: "smooth" });
    }
  });
})();
"#;
