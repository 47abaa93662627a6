/// Substitute `{0}`, `{1}`, ... placeholders in a localized template.
/// Unknown placeholders are left untouched.
pub fn interpolate(template: &str, args: &[&str]) -> String {
    let mut out = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{{i}}}"), arg);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_in_order() {
        assert_eq!(
            interpolate("{0} removed by {1}", &["Dupont", "admin"]),
            "Dupont removed by admin"
        );
    }

    #[test]
    fn leaves_unknown_placeholders() {
        assert_eq!(interpolate("at least {0} ({1})", &["3"]), "at least 3 ({1})");
    }

    #[test]
    fn no_placeholders() {
        assert_eq!(interpolate("saved", &[]), "saved");
    }
}
