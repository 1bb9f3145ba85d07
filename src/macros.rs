/// Builds a [`JsonNode`](crate::JsonNode) from JSON-like syntax.
///
/// ```rust
/// use serde_period::{node, JsonNode};
///
/// let tree = node!({
///     "periodType": { "name": "Days" },
///     "fieldType": { "name": "days" },
///     "days": 3
/// });
/// assert!(tree.is_object());
/// ```
#[macro_export]
macro_rules! node {
    (null) => {
        $crate::JsonNode::Null
    };

    (true) => {
        $crate::JsonNode::Bool(true)
    };

    (false) => {
        $crate::JsonNode::Bool(false)
    };

    ([]) => {
        $crate::JsonNode::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::JsonNode::Array(vec![$($crate::node!($elem)),*])
    };

    ({}) => {
        $crate::JsonNode::Object($crate::NodeMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::NodeMap::new();
        $(
            object.insert($key.to_string(), $crate::node!($value));
        )*
        $crate::JsonNode::Object(object)
    }};

    // Scalars: anything with a `From` conversion into a node
    ($s:expr) => {
        $crate::JsonNode::from($s)
    };
}

#[cfg(test)]
mod tests {
    use crate::{JsonNode, NodeMap, Number};

    #[test]
    fn test_node_macro_primitives() {
        assert_eq!(node!(null), JsonNode::Null);
        assert_eq!(node!(true), JsonNode::Bool(true));
        assert_eq!(node!(42), JsonNode::Number(Number::Integer(42)));
        assert_eq!(node!(1.5), JsonNode::Number(Number::Float(1.5)));
        assert_eq!(node!("Hours"), JsonNode::String("Hours".to_string()));
    }

    #[test]
    fn test_node_macro_nested_objects() {
        assert_eq!(node!({}), JsonNode::Object(NodeMap::new()));

        let tree = node!({
            "periodType": { "name": "Weeks" },
            "weeks": 2,
            "tags": [1, "a"]
        });
        assert_eq!(tree.path("periodType").path("name").as_str(), Some("Weeks"));
        assert_eq!(tree.path("weeks").as_i64(), Some(2));
        assert_eq!(
            tree.path("tags"),
            &JsonNode::Array(vec![JsonNode::from(1), JsonNode::from("a")])
        );
    }
}
