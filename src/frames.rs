use std::ops::Range;

use crate::marker::MarkerCategory;
use crate::scanner::Markers;

/// Splits a window into the JPEG images it contains.
///
/// An image runs from an SOI marker up to and including the EOI that brings the SOI nesting back
/// to zero, so an embedded thumbnail stays part of its parent image. EOI markers outside any
/// image are skipped. An image still open when the window ends is not yielded; see
/// [`Frames::truncated`].
#[derive(Clone, Debug)]
pub struct Frames<'a> {
    markers: Markers<'a>,
    start: Option<usize>,
    depth: usize,
}

impl<'a> Frames<'a> {
    pub fn new(data: &'a [u8]) -> Frames<'a> {
        Frames {
            markers: Markers::new(data),
            start: None,
            depth: 0,
        }
    }

    /// Whether an image was started but not finished inside the window.
    ///
    /// Only meaningful once the iterator has returned `None`.
    pub fn truncated(&self) -> bool {
        self.start.is_some()
    }
}

impl<'a> Iterator for Frames<'a> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        for hit in &mut self.markers {
            match hit.category {
                MarkerCategory::StartOfImage => {
                    if self.depth == 0 {
                        self.start = Some(hit.offset);
                    }
                    self.depth += 1;
                },
                MarkerCategory::EndOfImage if self.depth > 0 => {
                    self.depth -= 1;
                    if self.depth == 0 {
                        if let Some(start) = self.start.take() {
                            return Some(start..hit.offset + 2);
                        }
                    }
                },
                _ => {},
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_images_with_junk_between() {
        let data = [
            0x52, 0x49, 0xFF, 0xD8, 0x01, 0xFF, 0xD9,
            0x00, 0x00, 0xFF, 0xD8, 0xFF, 0xC0, 0x02, 0xFF, 0xD9, 0x33,
        ];
        let mut frames = Frames::new(&data);
        assert_eq!(frames.next(), Some(2..7));
        assert_eq!(frames.next(), Some(9..16));
        assert_eq!(frames.next(), None);
        assert!(!frames.truncated());
    }

    #[test]
    fn nested_thumbnail_stays_inside() {
        let data = [0xFF, 0xD8, 0xFF, 0xE1, 0xFF, 0xD8, 0xFF, 0xD9, 0xFF, 0xD9];
        let frames: Vec<_> = Frames::new(&data).collect();
        assert_eq!(frames, vec![0..10]);
    }

    #[test]
    fn unterminated_image() {
        let data = [0xFF, 0xD8, 0xFF, 0xD9, 0xFF, 0xD8, 0x10, 0x20];
        let mut frames = Frames::new(&data);
        assert_eq!(frames.next(), Some(0..4));
        assert_eq!(frames.next(), None);
        assert!(frames.truncated());
    }

    #[test]
    fn orphan_eoi_is_skipped() {
        let data = [0xFF, 0xD9, 0xFF, 0xD8, 0xFF, 0xD9];
        let frames: Vec<_> = Frames::new(&data).collect();
        assert_eq!(frames, vec![2..6]);
    }

    #[test]
    fn stuffed_eoi_lookalike_is_data() {
        // FF 00 D9 is stuffing followed by a plain data byte.
        let data = [0xFF, 0xD8, 0xFF, 0x00, 0xD9, 0xFF, 0xD9];
        let frames: Vec<_> = Frames::new(&data).collect();
        assert_eq!(frames, vec![0..7]);
    }
}
