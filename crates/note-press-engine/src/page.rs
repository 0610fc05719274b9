/// Title used for every generated page.
pub const PAGE_TITLE: &str = "Notes";

// `format!` needs a literal, so the template text lives in a macro.
macro_rules! page_template {
    () => {
        r#"<!DOCTYPE html>
<html>
  <head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" type="text/css" href="/style.css">
  </head>
  <body>
  <section>
    <span><a href="/">←Back</a></span>
  </section>
  <section class="note">
    {content}
  </section>
  </body>
</html>"#
    };
}

/// Fixed page skeleton with `{title}` and `{content}` slots.
pub const PAGE_TEMPLATE: &str = page_template!();

/// Substitutes a title and rendered fragment into [`PAGE_TEMPLATE`].
pub fn render_page(title: &str, content: &str) -> String {
    format!(page_template!(), title = title, content = content)
}
