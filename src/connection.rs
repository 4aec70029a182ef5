// connection.rs
// Connection records between charge pairs and the reconciliation logic
// that regenerates them after a press/release cycle

use ultraviolet::Vec2;

use crate::charge::Charge;

/// A line between two distinct charges, anchored at the centers both had
/// when it was created. Connections are never moved; they are torn down and
/// recreated, which is why they visually detach while a charge is dragged.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub id: u64,
    pub a: u64,
    pub b: u64,
    pub from: Vec2,
    pub to: Vec2,
}

impl Connection {
    /// Whether this connection joins the unordered pair `(x, y)`.
    pub fn joins(&self, x: u64, y: u64) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    pub fn touches(&self, id: u64) -> bool {
        self.a == id || self.b == id
    }
}

#[derive(Debug, Default)]
pub struct ConnectionGraph {
    connections: Vec<Connection>,
    next_id: u64,
}

impl ConnectionGraph {
    pub fn new() -> Self {
        Self {
            connections: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    pub fn has_connection(&self, a: u64, b: u64) -> bool {
        self.connections.iter().any(|c| c.joins(a, b))
    }

    /// Line segments for the display sink, one per connection.
    pub fn endpoints(&self) -> Vec<(Vec2, Vec2)> {
        self.connections.iter().map(|c| (c.from, c.to)).collect()
    }

    /// Create a connection between `charges[i]` and `charges[j]`, anchored
    /// at both current centers, and register it on both incident lists.
    pub fn connect(&mut self, charges: &mut [Charge], i: usize, j: usize) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.connections.push(Connection {
            id,
            a: charges[i].id,
            b: charges[j].id,
            from: charges[i].center(),
            to: charges[j].center(),
        });
        charges[i].connections.push(id);
        charges[j].connections.push(id);
        id
    }

    /// Remove every connection incident to `charge_id`, clearing the
    /// back-references held by the surviving endpoints.
    pub fn remove_incident(&mut self, charges: &mut [Charge], charge_id: u64) {
        let mut removed = Vec::new();
        self.connections.retain(|c| {
            if c.touches(charge_id) {
                removed.push(c.id);
                false
            } else {
                true
            }
        });
        if removed.is_empty() {
            return;
        }
        for charge in charges.iter_mut() {
            charge.connections.retain(|cid| !removed.contains(cid));
        }
    }

    /// Regenerate connections for the staged charges against every other
    /// present charge. Pairs that already have a connection are skipped, so
    /// staging a charge twice before a release cannot produce duplicate
    /// parallel lines.
    pub fn reconcile(&mut self, staged: &[u64], charges: &mut [Charge]) {
        for &sid in staged {
            let s = match charges.iter().position(|c| c.id == sid) {
                Some(s) => s,
                None => continue,
            };
            for t in 0..charges.len() {
                if t == s || self.has_connection(sid, charges[t].id) {
                    continue;
                }
                self.connect(charges, s, t);
            }
        }
    }
}
