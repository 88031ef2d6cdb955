//! Permission map and role/path/method graph.
//!
//! Both views are derived from the compiled [`RouteTable`]. The graph payload
//! is shaped for network-visualization widgets (`{nodes, edges}`); layout is
//! left entirely to the client.

use std::collections::BTreeSet;

use serde::Serialize;

use authmap_core::error::{AuthMapError, Result};

use crate::policy::RouteTable;

/// One `(role, path, method)` permission record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Permission {
    pub path: String,
    pub method: String,
    pub role: String,
}

/// Permission records ordered by `(path, method, role)`.
pub fn permissions(table: &RouteTable) -> Vec<Permission> {
    let mut out: Vec<Permission> = table
        .entries()
        .map(|e| Permission {
            path: e.path,
            method: e.method.as_str().to_string(),
            role: e.policy.required_role().to_string(),
        })
        .collect();
    out.sort();
    out
}

/// Column order of the permissions export.
pub const CSV_HEADER: [&str; 3] = ["role", "path", "method"];

/// Permission records as CSV (`role,path,method`), same order as [`permissions`].
pub fn permissions_csv(table: &RouteTable) -> Result<String> {
    let mut w = csv::Writer::from_writer(Vec::new());
    w.write_record(CSV_HEADER)
        .map_err(|e| AuthMapError::Internal(format!("csv write failed: {e}")))?;
    for p in permissions(table) {
        w.write_record([&p.role, &p.path, &p.method])
            .map_err(|e| AuthMapError::Internal(format!("csv write failed: {e}")))?;
    }
    let bytes = w
        .into_inner()
        .map_err(|e| AuthMapError::Internal(format!("csv flush failed: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AuthMapError::Internal(format!("csv not utf-8: {e}")))
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub group: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub label: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PermissionGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

const ROLE: &str = "role";
const PATH: &str = "path";
const METHOD: &str = "method";

fn node(group: &'static str, label: &str) -> GraphNode {
    GraphNode {
        id: format!("{group}:{label}"),
        label: label.to_string(),
        group,
    }
}

fn edge(from: &GraphNode, to: &GraphNode, label: &'static str) -> GraphEdge {
    GraphEdge {
        from: from.id.clone(),
        to: to.id.clone(),
        label,
    }
}

/// Build `role -CAN_ACCESS-> path -ALLOWS-> method`, one node per distinct
/// value and no duplicate edges.
pub fn permission_graph(table: &RouteTable) -> PermissionGraph {
    let mut nodes = BTreeSet::new();
    let mut edges = BTreeSet::new();

    for p in permissions(table) {
        let role = node(ROLE, &p.role);
        let path = node(PATH, &p.path);
        let method = node(METHOD, &p.method);

        edges.insert(edge(&role, &path, "CAN_ACCESS"));
        edges.insert(edge(&path, &method, "ALLOWS"));
        nodes.insert(role);
        nodes.insert(path);
        nodes.insert(method);
    }

    PermissionGraph {
        nodes: nodes.into_iter().collect(),
        edges: edges.into_iter().collect(),
    }
}
