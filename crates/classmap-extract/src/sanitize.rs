//! Class name normalisation
//!
//! Class map reports print binary names (`java.lang.String`). Downstream
//! tooling keys classes by internal form (`java/lang/String`), with lambda
//! proxies written as `Outer$$Lambda+0x...`.

/// Rewrite a dotted class name into slash form.
///
/// Runs two passes in a fixed order: every `.` becomes `/`, then every `/0x`
/// becomes `+0x`. The first pass is what produces the `/0x` in lambda names,
/// so the passes cannot be swapped or merged.
pub fn sanitize_class_name(class_name: &str) -> String {
    class_name.replace('.', "/").replace("/0x", "+0x")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_class() {
        assert_eq!(sanitize_class_name("java.lang.String"), "java/lang/String");
    }

    #[test]
    fn test_lambda_suffix() {
        assert_eq!(
            sanitize_class_name("com.foo.Bar$$Lambda.0x00000abc"),
            "com/foo/Bar$$Lambda+0x00000abc"
        );
    }

    #[test]
    fn test_existing_slash_hex_is_rewritten() {
        assert_eq!(sanitize_class_name("a/0x1.b"), "a+0x1/b");
    }

    #[test]
    fn test_inner_and_array_names_untouched() {
        assert_eq!(sanitize_class_name("java.util.Map$Entry"), "java/util/Map$Entry");
        assert_eq!(sanitize_class_name("[Ljava.lang.Object;"), "[Ljava/lang/Object;");
    }

    #[test]
    fn test_bare_hex_untouched() {
        // `0x` only gets a `+` when a separator precedes it
        assert_eq!(sanitize_class_name("Foo0x12"), "Foo0x12");
    }
}
