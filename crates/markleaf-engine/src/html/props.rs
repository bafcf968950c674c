use linked_hash_map::LinkedHashMap;

/// HTML attributes in insertion order.
pub type Props = LinkedHashMap<String, String>;

/// Serializes props as ` key="value"` pairs in insertion order.
///
/// Values are not escaped.
pub fn props_to_html(props: &Props) -> String {
    props
        .iter()
        .map(|(key, value)| format!(" {key}=\"{value}\""))
        .collect()
}
