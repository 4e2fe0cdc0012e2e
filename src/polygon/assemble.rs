//! Assembly of directed boundary edges into polygons.

use super::core::{signed_area, Location, Ring};
use super::overlay::VertexKey;
use super::shape::Polygon;
use crate::error::TopologyError;
use crate::predicates::{orient2d, Orientation};
use crate::primitives::{Point2, Segment2};
use std::collections::HashMap;

/// Builds polygons from boundary edges that have the interior on their left.
///
/// Rings are traced by always taking the leftmost turn, split wherever they
/// revisit a vertex, and stripped of collinear vertices. CCW rings become
/// shells and CW rings holes; each hole goes to the smallest shell that
/// contains it.
pub(crate) fn assemble(edges: Vec<Segment2<f64>>) -> Result<Vec<Polygon>, TopologyError> {
    let mut shells: Vec<Ring> = Vec::new();
    let mut holes: Vec<Ring> = Vec::new();

    for traced in trace(&edges)? {
        for vertices in split_at_repeats(traced) {
            let vertices = drop_collinear(vertices);
            if vertices.len() < 3 {
                continue;
            }
            let area = signed_area(&vertices);
            if area > 0.0 {
                shells.push(Ring::new(vertices));
            } else if area < 0.0 {
                holes.push(Ring::new(vertices));
            }
        }
    }

    let mut owned: Vec<Vec<Ring>> = vec![Vec::new(); shells.len()];
    for hole in holes {
        let owner = shells
            .iter()
            .enumerate()
            .filter(|(_, shell)| encloses(shell, &hole))
            .min_by(|(_, a), (_, b)| a.area().total_cmp(&b.area()))
            .map(|(i, _)| i);

        match owner {
            Some(i) => owned[i].push(hole),
            None => return Err(TopologyError::OrphanHole { area: hole.area() }),
        }
    }

    Ok(shells
        .into_iter()
        .zip(owned)
        .map(|(shell, holes)| Polygon::new(shell, holes))
        .collect())
}

/// Walks the edges into closed vertex loops.
fn trace(edges: &[Segment2<f64>]) -> Result<Vec<Vec<Point2<f64>>>, TopologyError> {
    let mut outgoing: HashMap<VertexKey, Vec<usize>> = HashMap::new();
    for (i, edge) in edges.iter().enumerate() {
        outgoing.entry(VertexKey::of(edge.start)).or_default().push(i);
    }

    let mut used = vec![false; edges.len()];
    let mut loops = Vec::new();

    for first in 0..edges.len() {
        if used[first] {
            continue;
        }
        used[first] = true;

        let origin = VertexKey::of(edges[first].start);
        let mut vertices = vec![edges[first].start];
        let mut current = edges[first];

        loop {
            let at = VertexKey::of(current.end);
            if at == origin {
                break;
            }
            vertices.push(current.end);

            let incoming = current.direction();
            let next = outgoing
                .get(&at)
                .into_iter()
                .flatten()
                .copied()
                .filter(|&k| !used[k])
                .max_by(|&i, &j| {
                    incoming
                        .turn_angle(edges[i].direction())
                        .total_cmp(&incoming.turn_angle(edges[j].direction()))
                });

            let Some(next) = next else {
                return Err(TopologyError::OpenBoundary {
                    x: current.end.x,
                    y: current.end.y,
                });
            };
            used[next] = true;
            current = edges[next];
        }

        loops.push(vertices);
    }

    Ok(loops)
}

/// Splits a loop into simple loops wherever a vertex repeats.
fn split_at_repeats(vertices: Vec<Point2<f64>>) -> Vec<Vec<Point2<f64>>> {
    let mut stack: Vec<Point2<f64>> = Vec::with_capacity(vertices.len());
    let mut seen: HashMap<VertexKey, usize> = HashMap::new();
    let mut loops = Vec::new();

    for v in vertices {
        let key = VertexKey::of(v);
        if let Some(&at) = seen.get(&key) {
            let tail: Vec<Point2<f64>> = stack.drain(at + 1..).collect();
            for p in &tail {
                seen.remove(&VertexKey::of(*p));
            }
            let mut inner = Vec::with_capacity(tail.len() + 1);
            inner.push(v);
            inner.extend(tail);
            loops.push(inner);
        } else {
            seen.insert(key, stack.len());
            stack.push(v);
        }
    }

    loops.push(stack);
    loops
}

/// Removes vertices that are exactly collinear with their neighbours.
fn drop_collinear(mut vertices: Vec<Point2<f64>>) -> Vec<Point2<f64>> {
    loop {
        let n = vertices.len();
        if n < 3 {
            return vertices;
        }
        let keep: Vec<bool> = (0..n)
            .map(|i| {
                orient2d(vertices[(i + n - 1) % n], vertices[i], vertices[(i + 1) % n])
                    != Orientation::Collinear
            })
            .collect();
        if keep.iter().all(|&k| k) {
            return vertices;
        }
        let mut flags = keep.into_iter();
        vertices.retain(|_| flags.next().unwrap_or(true));
    }
}

/// Tests whether `hole` lies inside `shell`.
///
/// Decided by the first hole vertex off the shell boundary; a hole touching
/// the shell at every vertex falls back to an edge midpoint.
fn encloses(shell: &Ring, hole: &Ring) -> bool {
    for &v in hole.vertices() {
        match shell.locate(v) {
            Location::Inside => return true,
            Location::Outside => return false,
            Location::Boundary => {}
        }
    }
    hole.edges()
        .next()
        .is_some_and(|edge| shell.locate(edge.midpoint()) != Location::Outside)
}
