//! Corner-in-box collision test.
//!
//! Only the four corners of the subject are tested against each candidate.
//! Two boxes that cross edge through edge without a corner inside the other
//! are not reported. Gameplay is tuned around this, so keep it.

use crate::sprite::Sprite;

/// `true` as soon as any corner of `subject` lies inside any of `others`.
pub fn collides<'a, I>(subject: &Sprite, others: I) -> bool
where
    I: IntoIterator<Item = &'a Sprite>,
{
    let corners = subject.bounding_box().corners();
    others
        .into_iter()
        .any(|other| corners.iter().any(|&c| other.contains_point(c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_hit() {
        let car = Sprite::player(10, 5);
        let none: [Sprite; 0] = [];
        assert!(!collides(&car, &none));
    }

    #[test]
    fn same_footprint_hits() {
        let a = Sprite::player(10, 5);
        let b = Sprite::obstacle(10, 5);
        assert!(collides(&a, [&b]));
    }

    #[test]
    fn touching_edges_hit() {
        // b's top row equals a's lower corner row.
        let a = Sprite::player(10, 5);
        let b = Sprite::obstacle(14, 5);
        assert!(collides(&a, [&b]));
    }

    #[test]
    fn adjacent_lanes_do_not_hit() {
        let a = Sprite::player(10, 1);
        let b = Sprite::obstacle(10, 5);
        // a's right edge is col 4, b starts at col 5.
        assert!(!collides(&a, [&b]));
    }

    #[test]
    fn stops_at_first_hit() {
        let a = Sprite::player(10, 5);
        let far = Sprite::obstacle(0, 9);
        let hit = Sprite::obstacle(12, 5);
        assert!(collides(&a, [&far, &hit]));
    }
}
