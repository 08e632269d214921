//! Portuguese name inflection for route and display names.
//!
//! Route model names are plural and lowercase ("produtos", "tributacoes").
//! Type names are singular and capitalized ("Produto", "Tributacao"). The
//! rules here are the naming convention, not a general-purpose inflector.

/// Singularize a plural route or table name.
///
/// `"tributacoes"` becomes `"tributacao"`, `"armazens"` becomes `"armazem"`,
/// anything else ending in `s` has every trailing `s` removed. Names without
/// a trailing `s` pass through unchanged.
pub fn singularize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("coes") {
        return format!("{stem}cao");
    }
    if let Some(stem) = name.strip_suffix("ns") {
        return format!("{stem}m");
    }
    if name.len() > 1 && name.ends_with('s') {
        return name.trim_end_matches('s').to_string();
    }
    name.to_string()
}

/// Uppercase the first character, lowercase the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Singular display name derived from a table name.
pub fn display_name_singular(table_name: &str) -> String {
    capitalize(&singularize(table_name).replace('_', " "))
}

/// Plural display name derived from a table name, restoring the `ções`
/// accent that the ascii table name flattens.
pub fn display_name_plural(table_name: &str) -> String {
    if let Some(stem) = table_name.strip_suffix("coes") {
        return capitalize(&format!("{stem}ções"));
    }
    capitalize(&table_name.replace('_', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singularize_handles_coes_suffix() {
        assert_eq!(singularize("tributacoes"), "tributacao");
    }

    #[test]
    fn singularize_handles_ns_suffix() {
        assert_eq!(singularize("armazens"), "armazem");
    }

    #[test]
    fn singularize_strips_all_trailing_s() {
        assert_eq!(singularize("produtos"), "produto");
        assert_eq!(singularize("empresas"), "empresa");
    }

    #[test]
    fn singularize_leaves_singular_names_alone() {
        assert_eq!(singularize("estoque"), "estoque");
        assert_eq!(singularize("s"), "s");
    }

    #[test]
    fn capitalize_lowercases_the_tail() {
        assert_eq!(capitalize("produto"), "Produto");
        assert_eq!(capitalize("PRODUTO"), "Produto");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn display_names_from_table() {
        assert_eq!(display_name_singular("produtos"), "Produto");
        assert_eq!(display_name_singular("regras_tributarias"), "Regras tributaria");
        assert_eq!(display_name_plural("produtos"), "Produtos");
        assert_eq!(display_name_plural("tributacoes"), "Tributações");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: singularizing never leaves a trailing `s` behind.
            #[test]
            fn singularize_leaves_no_trailing_s(name in "[a-z_]{2,20}") {
                prop_assert!(!singularize(&name).ends_with('s'));
            }

            /// Property: capitalize is idempotent.
            #[test]
            fn capitalize_is_idempotent(name in "[a-zA-Z_]{0,20}") {
                let once = capitalize(&name);
                prop_assert_eq!(capitalize(&once), once);
            }
        }
    }
}
