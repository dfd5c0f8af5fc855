//! Entity-type labels derived from payload types.

use std::any::type_name;

/// Returns the short name used as the default entity type for payload `T`.
///
/// Module paths are stripped from every path segment, so
/// `alloc::vec::Vec<app::User>` becomes `Vec<User>`. The unit type has no
/// name: payload-less outcomes behave like the untyped constructors.
pub fn entity_name<T: ?Sized>() -> Option<String> {
    let full = type_name::<T>();
    if full == "()" {
        return None;
    }

    let mut short = String::with_capacity(full.len());
    let mut path = String::new();
    for ch in full.chars() {
        match ch {
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';' | '*' => {
                push_last_segment(&mut short, &path);
                path.clear();
                short.push(ch);
            }
            _ => path.push(ch),
        }
    }
    push_last_segment(&mut short, &path);
    Some(short)
}

fn push_last_segment(out: &mut String, path: &str) {
    if let Some(segment) = path.rsplit("::").next() {
        out.push_str(segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod inner {
        pub struct Account;
        pub struct Wrapper<T>(pub T);
    }

    #[test]
    fn test_strips_module_path() {
        assert_eq!(entity_name::<inner::Account>().as_deref(), Some("Account"));
    }

    #[test]
    fn test_primitives_keep_their_name() {
        assert_eq!(entity_name::<i32>().as_deref(), Some("i32"));
        assert_eq!(entity_name::<str>().as_deref(), Some("str"));
    }

    #[test]
    fn test_strips_generic_arguments_paths() {
        assert_eq!(
            entity_name::<Vec<inner::Account>>().as_deref(),
            Some("Vec<Account>")
        );
        assert_eq!(
            entity_name::<inner::Wrapper<(u8, String)>>().as_deref(),
            Some("Wrapper<(u8, String)>")
        );
    }

    #[test]
    fn test_unit_has_no_name() {
        assert_eq!(entity_name::<()>(), None);
    }
}
