// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use ahash::{AHashMap, AHashSet};
use num_traits::Zero;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use smallvec::SmallVec;

use crate::geometry::Point2;
use crate::kernel::predicates::{circumcenter, incircle, orient2d, strictly_between};
use crate::operations::triangulation::{INFINITE_VERTEX, Locate, Triangle};

const NO_FACE: usize = usize::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Face {
    v: [usize; 3],
    // n[i] is the face across the edge opposite v[i]
    n: [usize; 3],
}

impl Face {
    #[inline]
    fn new(v: [usize; 3]) -> Self {
        Face { v, n: [NO_FACE; 3] }
    }

    #[inline]
    fn infinite_index(&self) -> Option<usize> {
        self.v.iter().position(|&v| v == INFINITE_VERTEX)
    }

    #[inline]
    fn is_infinite(&self) -> bool {
        self.infinite_index().is_some()
    }

    /// Directed edge opposite `v[i]`, in the face's counter-clockwise order.
    #[inline]
    fn edge(&self, i: usize) -> (usize, usize) {
        (self.v[(i + 1) % 3], self.v[(i + 2) % 3])
    }

    #[inline]
    fn edge_index(&self, a: usize, b: usize) -> Option<usize> {
        (0..3).find(|&i| self.edge(i) == (a, b))
    }
}

/// Delaunay triangulation of exact points with a symbolic infinite vertex.
///
/// Faces live in slots; a slot index is stable once [`build`](Self::build)
/// returns. Each hull edge `a -> b` (exterior on its left) carries a ghost face
/// `[a, b, INFINITE_VERTEX]` (up to rotation), so every face has exactly three
/// neighbors.
#[derive(Clone, Debug)]
pub struct Delaunay {
    points: Vec<Point2>,
    faces: Vec<Face>,
    alive: Vec<bool>,
    free: Vec<usize>,
    inserted: Vec<bool>,
    hint: usize,
    neighbors: Vec<SmallVec<[usize; 8]>>,
    finite_count: usize,
}

impl Delaunay {
    /// Build the Delaunay triangulation of `pts`, inserting in input order.
    /// Duplicates are ignored.
    pub fn build(pts: &[Point2]) -> Self {
        Self::build_with(pts, None)
    }

    /// Build with the insertion order shuffled by `shuffle_seed`, if given.
    pub fn build_with(pts: &[Point2], shuffle_seed: Option<u64>) -> Self {
        let mut order: Vec<usize> = (0..pts.len()).collect();
        if let Some(seed) = shuffle_seed {
            let mut rng = StdRng::seed_from_u64(seed);
            order.shuffle(&mut rng);
        }

        let mut dt = Delaunay {
            points: pts.to_vec(),
            faces: Vec::new(),
            alive: Vec::new(),
            free: Vec::new(),
            inserted: vec![false; pts.len()],
            hint: NO_FACE,
            neighbors: Vec::new(),
            finite_count: 0,
        };

        match dt.seed_triangle(&order) {
            Some(seed) => {
                dt.init_seed(seed);
                for &pid in &order {
                    if !dt.inserted[pid] {
                        dt.insert(pid);
                    }
                }
            }
            None if pts.len() >= 3 => {
                log::warn!(
                    "{} points are collinear or coincident; no finite faces",
                    pts.len()
                );
            }
            None => log::debug!("{} points span no triangle", pts.len()),
        }

        dt.finish();
        dt
    }

    /// First three distinct, non-collinear points in insertion order, as a CCW triple.
    fn seed_triangle(&self, order: &[usize]) -> Option<[usize; 3]> {
        let &a = order.first()?;
        let &b = order
            .iter()
            .find(|&&i| self.points[i] != self.points[a])?;
        let &c = order
            .iter()
            .find(|&&i| !orient2d(&self.points[a], &self.points[b], &self.points[i]).is_zero())?;

        if orient2d(&self.points[a], &self.points[b], &self.points[c]).is_positive() {
            Some([a, b, c])
        } else {
            Some([a, c, b])
        }
    }

    fn init_seed(&mut self, [a, b, c]: [usize; 3]) {
        let created = [
            self.new_face([a, b, c]),
            self.new_face([c, b, INFINITE_VERTEX]),
            self.new_face([a, c, INFINITE_VERTEX]),
            self.new_face([b, a, INFINITE_VERTEX]),
        ];
        self.stitch(&created);
        for v in [a, b, c] {
            self.inserted[v] = true;
        }
        self.hint = created[0];
    }

    /// Insert a single point using Bowyer-Watson over finite and ghost faces.
    fn insert(&mut self, pid: usize) {
        let p = self.points[pid].clone();
        let start = self.walk(&p);

        let first = self.faces[start];
        if !first.is_infinite() && first.v.iter().any(|&v| self.points[v] == p) {
            log::trace!("skipping duplicate obstacle {pid} at {p}");
            return;
        }

        // Conflict region is connected and star-shaped from p
        let mut in_cavity: AHashSet<usize> = AHashSet::default();
        in_cavity.insert(start);
        let mut cavity = vec![start];
        let mut stack = vec![start];
        while let Some(f) = stack.pop() {
            for &g in &self.faces[f].n {
                if !in_cavity.contains(&g) && self.in_conflict(g, &p) {
                    in_cavity.insert(g);
                    cavity.push(g);
                    stack.push(g);
                }
            }
        }

        let mut boundary: Vec<(usize, usize, usize)> = Vec::new();
        for &f in &cavity {
            let face = self.faces[f];
            for i in 0..3 {
                if !in_cavity.contains(&face.n[i]) {
                    let (u, w) = face.edge(i);
                    boundary.push((u, w, face.n[i]));
                }
            }
        }
        for &f in &cavity {
            self.release(f);
        }

        let mut created = Vec::with_capacity(boundary.len());
        for (u, w, outer) in boundary {
            let nf = self.new_face([u, w, pid]);
            self.faces[nf].n[2] = outer;
            if let Some(j) = self.faces[outer].edge_index(w, u) {
                self.faces[outer].n[j] = nf;
            }
            created.push(nf);
        }
        self.stitch(&created);

        self.inserted[pid] = true;
        if let Some(&f) = created.iter().find(|&&f| !self.faces[f].is_infinite()) {
            self.hint = f;
        }
    }

    fn in_conflict(&self, f: usize, p: &Point2) -> bool {
        let face = &self.faces[f];
        match face.infinite_index() {
            None => {
                let [a, b, c] = face.v;
                incircle(&self.points[a], &self.points[b], &self.points[c], p).is_positive()
            }
            Some(k) => {
                // hull edge with the exterior on its left
                let (a, b) = face.edge(k);
                let (pa, pb) = (&self.points[a], &self.points[b]);
                let o = orient2d(pa, pb, p);
                o.is_positive() || (o.is_zero() && strictly_between(pa, pb, p))
            }
        }
    }

    /// Link matching edges among freshly created faces.
    fn stitch(&mut self, created: &[usize]) {
        let mut open: AHashMap<(usize, usize), (usize, usize)> =
            AHashMap::with_capacity(created.len() * 3);
        for &f in created {
            for i in 0..3 {
                let (u, w) = self.faces[f].edge(i);
                if let Some((g, j)) = open.remove(&(w, u)) {
                    self.faces[f].n[i] = g;
                    self.faces[g].n[j] = f;
                } else {
                    open.insert((u, w), (f, i));
                }
            }
        }
    }

    fn new_face(&mut self, v: [usize; 3]) -> usize {
        let face = Face::new(v);
        match self.free.pop() {
            Some(f) => {
                self.faces[f] = face;
                self.alive[f] = true;
                f
            }
            None => {
                self.faces.push(face);
                self.alive.push(true);
                self.faces.len() - 1
            }
        }
    }

    fn release(&mut self, f: usize) {
        self.alive[f] = false;
        self.free.push(f);
    }

    fn finish(&mut self) {
        let mut neighbors: Vec<SmallVec<[usize; 8]>> = vec![SmallVec::new(); self.points.len()];
        for (f, face) in self.faces.iter().enumerate() {
            if !self.alive[f] {
                continue;
            }
            // every directed edge belongs to exactly one face
            for i in 0..3 {
                let (u, w) = face.edge(i);
                if u != INFINITE_VERTEX && w != INFINITE_VERTEX {
                    neighbors[u].push(w);
                }
            }
        }
        self.neighbors = neighbors;
        self.finite_count = self.finite_faces().count();

        log::debug!(
            "triangulated {} points: {} vertices, {} finite faces",
            self.points.len(),
            self.num_vertices(),
            self.finite_count
        );
    }

    /// Visibility walk from the hint; stops in the finite face containing `p`
    /// or in the first ghost face whose hull edge sees `p`.
    fn walk(&self, p: &Point2) -> usize {
        let mut cur = self.hint;
        for step in 0..=self.faces.len() {
            let face = &self.faces[cur];
            if face.is_infinite() {
                return cur;
            }
            let exit = (0..3).map(|k| (step + k) % 3).find(|&i| {
                let (a, b) = face.edge(i);
                orient2d(&self.points[a], &self.points[b], p).is_negative()
            });
            match exit {
                Some(i) => cur = face.n[i],
                None => return cur,
            }
        }

        log::warn!(
            "point location walk did not settle; scanning {} faces",
            self.faces.len()
        );
        self.scan(p)
    }

    fn scan(&self, p: &Point2) -> usize {
        let contains = |face: &Face| {
            (0..3).all(|i| {
                let (a, b) = face.edge(i);
                !orient2d(&self.points[a], &self.points[b], p).is_negative()
            })
        };
        let live = || (0..self.faces.len()).filter(move |&f| self.alive[f]);

        live()
            .find(|&f| !self.faces[f].is_infinite() && contains(&self.faces[f]))
            .or_else(|| live().find(|&f| self.faces[f].is_infinite() && self.in_conflict(f, p)))
            .unwrap_or(self.hint)
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[inline]
    pub fn point(&self, v: usize) -> &Point2 {
        &self.points[v]
    }

    /// Number of input points that became vertices (zero without finite faces).
    pub fn num_vertices(&self) -> usize {
        self.inserted.iter().filter(|&&b| b).count()
    }

    pub fn num_finite_faces(&self) -> usize {
        self.finite_count
    }

    /// Upper bound (exclusive) on face slot indices.
    pub fn face_slots(&self) -> usize {
        self.faces.len()
    }

    /// Slots of the finite faces, in increasing slot order.
    pub fn finite_faces(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.faces.len()).filter(move |&f| self.alive[f] && !self.faces[f].is_infinite())
    }

    #[inline]
    pub fn is_infinite(&self, f: usize) -> bool {
        self.faces[f].is_infinite()
    }

    /// Vertices of face `f`, counter-clockwise.
    #[inline]
    pub fn vertices(&self, f: usize) -> [usize; 3] {
        self.faces[f].v
    }

    /// Face across the edge opposite vertex `i` of face `f`.
    #[inline]
    pub fn neighbor(&self, f: usize, i: usize) -> usize {
        self.faces[f].n[i]
    }

    /// Circumcenter of finite face `f`, i.e. its Voronoi vertex.
    pub fn dual(&self, f: usize) -> Point2 {
        let [a, b, c] = self.faces[f].v;
        circumcenter(&self.points[a], &self.points[b], &self.points[c])
    }

    pub fn triangles(&self) -> Vec<Triangle> {
        self.finite_faces()
            .map(|f| {
                let [a, b, c] = self.faces[f].v;
                Triangle(a, b, c)
            })
            .collect()
    }

    pub fn locate(&self, p: &Point2) -> Locate {
        if self.finite_count == 0 {
            return Locate::Outside;
        }
        let f = self.walk(p);
        if self.faces[f].is_infinite() {
            Locate::Outside
        } else {
            Locate::Face(f)
        }
    }

    /// Index of an input point closest to `p`, or `None` without points.
    pub fn nearest_vertex(&self, p: &Point2) -> Option<usize> {
        if self.finite_count == 0 {
            return self
                .points
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| a.squared_distance(p).cmp(&b.squared_distance(p)))
                .map(|(i, _)| i);
        }

        // Greedy descent on the Delaunay graph ends at a nearest vertex.
        let face = self.faces[self.walk(p)];
        let mut best = face.v.into_iter().find(|&v| v != INFINITE_VERTEX)?;
        let mut best_dist = self.points[best].squared_distance(p);
        loop {
            let mut improved = false;
            for &w in &self.neighbors[best] {
                let d = self.points[w].squared_distance(p);
                if d < best_dist {
                    best = w;
                    best_dist = d;
                    improved = true;
                }
            }
            if !improved {
                return Some(best);
            }
        }
    }
}
