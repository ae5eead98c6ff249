//! i18n - Internationalization Module
//!
//! Hard-coded dictionary for the three supported locales and the
//! dotted key-path lookup every view reads its copy through.

mod en;
mod pl;
mod ru;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English
    En,
    /// Polish
    #[default]
    Pl,
    /// Russian
    Ru,
}

impl Locale {
    /// All locales, in switcher order
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Pl, Locale::Ru];

    /// Short tag shown on the language switcher buttons
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Pl => "PL",
            Locale::Ru => "RU",
        }
    }
}

/// A value in the translation dictionary.
///
/// Leaves are text or numbers; `List` holds plain bullet items, `Seq`
/// holds ordered records (process steps, case studies, chart points),
/// `Map` holds named children.
#[derive(Debug)]
pub enum Node {
    Text(&'static str),
    Num(i64),
    List(&'static [&'static str]),
    Seq(&'static [Node]),
    Map(&'static [(&'static str, Node)]),
}

impl Node {
    /// Child addressed by one path segment: a key into a map, or a
    /// numeric index into a sequence.
    pub fn get(&'static self, segment: &str) -> Option<&'static Node> {
        match self {
            Node::Map(entries) => entries
                .iter()
                .find(|(key, _)| *key == segment)
                .map(|(_, child)| child),
            Node::Seq(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Text leaf value, if this node is one
    pub fn text(&self) -> Option<&'static str> {
        match self {
            Node::Text(value) => Some(*value),
            _ => None,
        }
    }

    /// Numeric leaf value, if this node is one
    pub fn num(&self) -> Option<i64> {
        match self {
            Node::Num(value) => Some(*value),
            _ => None,
        }
    }

    /// Items of a string list, empty for any other shape
    pub fn items(&self) -> &'static [&'static str] {
        match self {
            Node::List(items) => *items,
            _ => &[],
        }
    }

    /// Records of a sequence, empty for any other shape
    pub fn records(&self) -> &'static [Node] {
        match self {
            Node::Seq(items) => *items,
            _ => &[],
        }
    }

    /// Text field of a record, with the field name as the visible
    /// placeholder when it is missing or not text.
    pub fn str(&'static self, key: &str) -> SharedString {
        match self.get(key).and_then(Node::text) {
            Some(value) => SharedString::from(value),
            None => SharedString::from(key.to_string()),
        }
    }
}

/// Document for one locale
fn document(locale: Locale) -> &'static Node {
    match locale {
        Locale::En => &en::DOCUMENT,
        Locale::Pl => &pl::DOCUMENT,
        Locale::Ru => &ru::DOCUMENT,
    }
}

/// Resolve a dotted key path against one locale's document.
pub fn lookup(locale: Locale, path: &str) -> Option<&'static Node> {
    let mut node = document(locale);
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    Some(node)
}

/// Translate a key path to text.
///
/// A path that is missing, or that resolves to something other than a
/// text leaf, yields the raw dotted path itself: a missing translation
/// shows up in the UI instead of crashing it or rendering blank.
pub fn t(locale: Locale, path: &str) -> SharedString {
    match lookup(locale, path).and_then(Node::text) {
        Some(value) => SharedString::from(value),
        None => SharedString::from(path.to_string()),
    }
}

/// Translate a key path to a list of bullet items.
///
/// On a miss the single returned item carries the raw path, keeping the
/// failure visible.
pub fn t_list(locale: Locale, path: &str) -> Vec<SharedString> {
    match lookup(locale, path) {
        Some(Node::List(items)) => items.iter().map(|item| SharedString::from(*item)).collect(),
        _ => vec![SharedString::from(path.to_string())],
    }
}

/// Translate a key path to a sequence of records, empty on a miss.
pub fn seq(locale: Locale, path: &str) -> &'static [Node] {
    match lookup(locale, path) {
        Some(node) => node.records(),
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_same_shape(path: &str, a: &'static Node, b: &'static Node) {
        match (a, b) {
            (Node::Text(_), Node::Text(_)) => {}
            (Node::Num(_), Node::Num(_)) => {}
            (Node::List(x), Node::List(y)) => {
                assert_eq!(x.len(), y.len(), "list length differs at {path}");
            }
            (Node::Seq(x), Node::Seq(y)) => {
                assert_eq!(x.len(), y.len(), "sequence length differs at {path}");
                for (i, (xa, ya)) in x.iter().zip(y.iter()).enumerate() {
                    assert_same_shape(&format!("{path}.{i}"), xa, ya);
                }
            }
            (Node::Map(x), Node::Map(y)) => {
                assert_eq!(x.len(), y.len(), "key count differs at {path}");
                for (key, child) in x.iter() {
                    let other = b
                        .get(key)
                        .unwrap_or_else(|| panic!("missing key at {path}.{key}"));
                    assert_same_shape(&format!("{path}.{key}"), child, other);
                }
            }
            _ => panic!("shape mismatch at {path}"),
        }
    }

    #[test]
    fn documents_share_one_key_path_set() {
        for locale in [Locale::Pl, Locale::Ru] {
            assert_same_shape("", document(Locale::En), document(locale));
        }
    }

    #[test]
    fn translates_known_keys_per_locale() {
        assert_eq!(t(Locale::En, "nav.home"), "Home");
        assert_eq!(t(Locale::Pl, "nav.home"), "Start");
        assert_eq!(t(Locale::Ru, "nav.home"), "Главная");
    }

    #[test]
    fn missing_path_returns_the_path_itself() {
        for locale in Locale::ALL {
            assert_eq!(t(locale, "nonexistent.path"), "nonexistent.path");
        }
    }

    #[test]
    fn non_text_node_falls_back_to_the_path() {
        assert_eq!(t(Locale::En, "hero.points"), "hero.points");
    }

    #[test]
    fn numeric_segments_index_into_sequences() {
        let node = lookup(Locale::En, "howWeWork.steps.0.title").expect("path");
        assert_eq!(node.text(), Some("Inquiry"));
        assert!(lookup(Locale::En, "howWeWork.steps.9.title").is_none());
    }

    #[test]
    fn list_lookup_keeps_misses_visible() {
        let items = t_list(Locale::Pl, "hero.points");
        assert_eq!(items.len(), 3);
        let missing = t_list(Locale::Pl, "hero.missing");
        assert_eq!(missing, vec![SharedString::from("hero.missing")]);
    }

    #[test]
    fn chart_points_expose_numeric_values() {
        let point = lookup(Locale::En, "portfolio.cases.1.chart.data.0").expect("path");
        assert_eq!(point.str("name"), "Before");
        assert_eq!(point.get("value").and_then(Node::num), Some(-35));
        assert_eq!(point.str("tooltip"), "-3,500 PLN deficit");
    }
}
