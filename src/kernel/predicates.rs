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

use num_traits::Zero;

use crate::geometry::Point2;
use crate::numeric::Exact;

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> Exact {
    &(&(&b.x - &a.x) * &(&c.y - &a.y)) - &(&(&b.y - &a.y) * &(&c.x - &a.x))
}

/// Positive iff `d` lies strictly inside the circle through `a`, `b`, `c`
/// (which must be counter-clockwise), zero if cocircular.
pub fn incircle(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> Exact {
    let adx = &a.x - &d.x;
    let ady = &a.y - &d.y;
    let bdx = &b.x - &d.x;
    let bdy = &b.y - &d.y;
    let cdx = &c.x - &d.x;
    let cdy = &c.y - &d.y;

    let alift = &adx.square() + &ady.square();
    let blift = &bdx.square() + &bdy.square();
    let clift = &cdx.square() + &cdy.square();

    let ab = &(&adx * &bdy) - &(&bdx * &ady);
    let bc = &(&bdx * &cdy) - &(&cdx * &bdy);
    let ca = &(&cdx * &ady) - &(&adx * &cdy);

    &(&(&alift * &bc) + &(&blift * &ca)) + &(&clift * &ab)
}

/// Center of the circle through `a`, `b`, `c`; the dual Voronoi vertex of the
/// triangle. Panics on collinear input.
pub fn circumcenter(a: &Point2, b: &Point2, c: &Point2) -> Point2 {
    let d = &Exact::from(2) * &orient2d(a, b, c);
    assert!(!d.is_zero(), "circumcenter of a degenerate triangle");

    // relative to `a` to keep the numerators small
    let bx = &b.x - &a.x;
    let by = &b.y - &a.y;
    let cx = &c.x - &a.x;
    let cy = &c.y - &a.y;
    let b_len = &bx.square() + &by.square();
    let c_len = &cx.square() + &cy.square();

    let ux = &(&(&cy * &b_len) - &(&by * &c_len)) / &d;
    let uy = &(&(&bx * &c_len) - &(&cx * &b_len)) / &d;

    Point2 {
        x: &a.x + &ux,
        y: &a.y + &uy,
    }
}

pub fn squared_circumradius(a: &Point2, b: &Point2, c: &Point2) -> Exact {
    circumcenter(a, b, c).squared_distance(a)
}

/// For `p` collinear with `a`, `b`: true iff `p` lies strictly inside the segment.
pub fn strictly_between(a: &Point2, b: &Point2, p: &Point2) -> bool {
    let dot = &(&(&p.x - &a.x) * &(&p.x - &b.x)) + &(&(&p.y - &a.y) * &(&p.y - &b.y));
    dot.is_negative()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i64, y: i64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn ccw_test() {
        assert!(orient2d(&p(0, 0), &p(1, 0), &p(0, 1)).is_positive());
        assert!(orient2d(&p(0, 0), &p(0, 1), &p(1, 0)).is_negative());
        assert!(orient2d(&p(0, 0), &p(1, 1), &p(2, 2)).is_zero());
    }

    #[test]
    fn incircle_signs() {
        let (a, b, c) = (p(0, 0), p(2, 0), p(0, 2));
        assert!(incircle(&a, &b, &c, &p(1, 1)).is_positive());
        assert!(incircle(&a, &b, &c, &p(2, 2)).is_zero());
        assert!(incircle(&a, &b, &c, &p(3, 3)).is_negative());
    }

    #[test]
    fn circumcenter_of_right_triangle_is_hypotenuse_midpoint() {
        let (a, b, c) = (p(0, 0), p(2, 0), p(0, 2));
        assert_eq!(circumcenter(&a, &b, &c), p(1, 1));
        assert_eq!(circumcenter(&b, &a, &c), p(1, 1));
        assert_eq!(squared_circumradius(&a, &b, &c), Exact::from(2));
    }

    #[test]
    fn circumcenter_can_be_fractional() {
        let (a, b, c) = (p(0, 0), p(10, 0), p(5, 9));
        let center = circumcenter(&a, &b, &c);
        assert_eq!(center, Point2::new(5, Exact::from_num_den(28, 9)));
        assert_eq!(
            squared_circumradius(&a, &b, &c),
            Exact::from_num_den(2809, 81)
        );
    }

    #[test]
    fn between_excludes_endpoints() {
        let (a, b) = (p(0, 0), p(4, 0));
        assert!(strictly_between(&a, &b, &p(2, 0)));
        assert!(!strictly_between(&a, &b, &p(4, 0)));
        assert!(!strictly_between(&a, &b, &p(5, 0)));
    }
}
