use itertools::Itertools;
use levelorder::{level_order, try_level_order, LevelOrderIterable, TraversalError, TraversalOptions};
use std::collections::HashMap;

/// A node of a database explorer: connections, databases, tables and columns
#[derive(Debug, PartialEq)]
struct SchemaNode {
    name: &'static str,
    children: Vec<SchemaNode>,
}

fn node(name: &'static str, children: Vec<SchemaNode>) -> SchemaNode {
    SchemaNode { name, children }
}

fn leaf(name: &'static str) -> SchemaNode {
    node(name, vec![])
}

fn children<'a>(&n: &&'a SchemaNode) -> std::slice::Iter<'a, SchemaNode> {
    n.children.iter()
}

// Layout of the forest (two connections)
//
//       local                      remote
//      /     \                       |
//   sales    hr                   archive
//   /   \     |                      |
// orders items staff              backups
//   |                                |
//   id                              date
fn connections() -> Vec<SchemaNode> {
    vec![
        node(
            "local",
            vec![
                node("sales", vec![node("orders", vec![leaf("id")]), leaf("items")]),
                node("hr", vec![leaf("staff")]),
            ],
        ),
        node("remote", vec![node("archive", vec![node("backups", vec![leaf("date")])])]),
    ]
}

#[test]
fn test_database_explorer() {
    let connections = connections();

    let result = connections
        .iter()
        .level_order(children)
        .map(|c| (c.level(), c.item().name))
        .collect_vec();

    assert_eq!(
        result,
        &[
            (0, "local"),
            (0, "remote"),
            (1, "sales"),
            (1, "hr"),
            (1, "archive"),
            (2, "orders"),
            (2, "items"),
            (2, "staff"),
            (2, "backups"),
            (3, "id"),
            (3, "date"),
        ]
    );
}

#[test]
fn test_every_node_once() {
    let connections = connections();

    fn collect<'a>(nodes: &'a [SchemaNode], depth: usize, into: &mut HashMap<&'a str, usize>) {
        for n in nodes {
            into.insert(n.name, depth);
            collect(&n.children, depth + 1, into);
        }
    }
    let mut expected = HashMap::new();
    collect(&connections, 0, &mut expected);

    let visited = level_order(&connections, children)
        .map(|c| (c.item().name, c.level()))
        .collect_vec();

    assert_eq!(visited.len(), expected.len());
    assert_eq!(visited.into_iter().collect::<HashMap<_, _>>(), expected);
}

#[test]
fn test_depth_limit() {
    let connections = connections();

    let options = TraversalOptions::new().with_max_level(1);
    let names = levelorder::LevelOrder::with_options(&connections, children, options)
        .map(|c| c.item().name)
        .collect_vec();

    assert_eq!(names, &["local", "remote", "sales", "hr", "archive"]);
}

#[test]
fn test_lazy_connection() {
    // Expanding a connection may fail, e.g., when the server is offline
    let connections = connections();

    let result = try_level_order(&connections, |&n: &&SchemaNode| match n.name {
        "remote" => Err("connection refused"),
        _ => Ok(n.children.iter()),
    })
    .map_ok(|c| c.item().name)
    .collect_vec();

    assert_eq!(
        result,
        &[
            Ok("local"),
            Ok("remote"),
            Err(TraversalError::Children("connection refused"))
        ]
    );
}

#[test]
fn test_no_roots() {
    let result = levelorder::LevelOrder::from_parts(
        None::<Vec<&SchemaNode>>,
        Some(children),
        TraversalOptions::default(),
    );
    assert_eq!(result.unwrap().count(), 0);
}
