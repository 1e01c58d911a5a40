// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Map object kinds that know how to add and remove themselves.
//
// All kinds are removed the same way, through `window.destroyObject(id)`;
// only creation differs per kind.

mod cluster;
mod marker;
mod shapes;

pub use cluster::Cluster;
pub use marker::Marker;
pub use shapes::{Circle, Polygon, Polyline};

use uuid::Uuid;

use crate::js::JsCommand;

/// Fresh engine-side id for an object the caller did not name.
fn new_object_id() -> String {
    Uuid::new_v4().to_string()
}

fn destroy_command(id: &str) -> String {
    JsCommand::window("destroyObject").arg(id).to_string()
}
