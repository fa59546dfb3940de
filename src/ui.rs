use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    remembered: &'a str,
}

/// Renders the single page, prefilling the login field with the remembered
/// username when there is one.
pub fn render_index(remembered: Option<&str>) -> Result<String, askama::Error> {
    IndexTemplate {
        remembered: remembered.unwrap_or_default(),
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefills_remembered_username_escaped() {
        let page = render_index(Some(r#"bob"><script>alert(1)</script>"#)).unwrap();
        assert!(page.contains(r#"value="bob"#));
        assert!(!page.contains(r#"bob"><script>"#));
        assert!(!page.contains("<script>alert(1)"));
    }

    #[test]
    fn empty_prefill_without_cookie() {
        let page = render_index(None).unwrap();
        assert!(page.contains(r#"id="login-username" placeholder="Username" value="""#));
        assert!(page.starts_with("<!DOCTYPE html>"));
    }
}
