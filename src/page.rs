//! Page wiring independent of the browser
//!
//! Every required element is resolved before any state is built; a missing
//! one aborts startup with its id.

use rand::Rng;

use crate::error::{Result, StartupError};
use crate::quotes::QuoteDisplay;
use crate::renderer::Canvas;
use crate::settings::Settings;
use crate::sky::Sky;

pub const CANVAS_ID: &str = "cosmic-background";
pub const QUOTE_TEXT_ID: &str = "quote-text";
pub const QUOTE_AUTHOR_ID: &str = "quote-author";
pub const SHUFFLE_ID: &str = "shuffle-stars";

/// Required element ids, in lookup order
pub const REQUIRED_IDS: [&str; 4] = [CANVAS_ID, QUOTE_TEXT_ID, QUOTE_AUTHOR_ID, SHUFFLE_ID];

/// The raw page elements the sky needs
#[derive(Debug)]
pub struct PageElements<E> {
    pub canvas: E,
    pub quote_text: E,
    pub quote_author: E,
    pub shuffle: E,
}

impl<E> PageElements<E> {
    /// Look up every required element, stopping at the first missing one
    pub fn locate<L>(mut lookup: L) -> Result<Self>
    where
        L: FnMut(&'static str) -> Option<E>,
    {
        let mut find = |id: &'static str| lookup(id).ok_or(StartupError::MissingElement { id });
        Ok(Self {
            canvas: find(CANVAS_ID)?,
            quote_text: find(QUOTE_TEXT_ID)?,
            quote_author: find(QUOTE_AUTHOR_ID)?,
            shuffle: find(SHUFFLE_ID)?,
        })
    }
}

/// Elements turned into working collaborators
pub struct BoundPage<C, D, E> {
    pub canvas: C,
    pub quote: D,
    /// The shuffle trigger, handed back for the caller to attach a listener
    pub shuffle: E,
}

/// Resolve and bind the page, then start the sky
///
/// `bind` turns raw elements into a canvas and quote slots and may itself
/// fail (wrong element type, no 2D context, bad settings). The sky is only
/// started once both steps succeed.
pub fn launch<E, C, D, R, L, B>(
    lookup: L,
    bind: B,
    rng: R,
    width: f64,
    height: f64,
) -> Result<(Sky<R>, BoundPage<C, D, E>)>
where
    R: Rng,
    C: Canvas,
    D: QuoteDisplay,
    L: FnMut(&'static str) -> Option<E>,
    B: FnOnce(PageElements<E>) -> Result<(Settings, BoundPage<C, D, E>)>,
{
    let elements = PageElements::locate(lookup)?;
    let (settings, mut page) = bind(elements)?;
    let sky = Sky::start(settings, rng, &mut page.canvas, &mut page.quote, width, height);
    Ok((sky, page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::QuoteSlots;
    use crate::renderer::{DrawCommand, RecordingCanvas};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::cell::Cell;

    /// A page holding every required id except `missing`
    fn page_without(missing: Option<&'static str>) -> impl FnMut(&'static str) -> Option<&'static str> {
        move |id| if Some(id) == missing { None } else { Some(id) }
    }

    fn bind_headless(
        elements: PageElements<&'static str>,
    ) -> Result<(Settings, BoundPage<RecordingCanvas, QuoteSlots, &'static str>)> {
        Ok((
            Settings::default(),
            BoundPage {
                canvas: RecordingCanvas::new(),
                quote: QuoteSlots::default(),
                shuffle: elements.shuffle,
            },
        ))
    }

    #[test]
    fn test_locate_all_present() {
        let elements = PageElements::locate(page_without(None)).unwrap();
        assert_eq!(elements.canvas, CANVAS_ID);
        assert_eq!(elements.quote_text, QUOTE_TEXT_ID);
        assert_eq!(elements.quote_author, QUOTE_AUTHOR_ID);
        assert_eq!(elements.shuffle, SHUFFLE_ID);
    }

    #[test]
    fn test_locate_reports_each_missing_id() {
        for missing in REQUIRED_IDS {
            let err = PageElements::locate(page_without(Some(missing))).unwrap_err();
            assert!(
                matches!(err, StartupError::MissingElement { id } if id == missing),
                "expected MissingElement for {missing}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_launch_builds_nothing_when_an_element_is_missing() {
        for missing in REQUIRED_IDS {
            let bound = Cell::new(false);
            let result = launch(
                page_without(Some(missing)),
                |elements| {
                    bound.set(true);
                    bind_headless(elements)
                },
                Pcg32::seed_from_u64(1),
                800.0,
                600.0,
            );

            assert!(matches!(result, Err(StartupError::MissingElement { id }) if id == missing));
            assert!(!bound.get(), "bind ran although #{missing} was missing");
        }
    }

    #[test]
    fn test_launch_stops_when_binding_fails() {
        let result = launch(
            page_without(None),
            |_elements: PageElements<&'static str>| -> Result<(Settings, BoundPage<RecordingCanvas, QuoteSlots, &'static str>)> {
                Err(StartupError::NotACanvas { id: CANVAS_ID })
            },
            Pcg32::seed_from_u64(1),
            800.0,
            600.0,
        );
        assert!(matches!(result, Err(StartupError::NotACanvas { id: CANVAS_ID })));
    }

    #[test]
    fn test_launch_starts_sky_once_page_resolves() {
        let (sky, page) = launch(page_without(None), bind_headless, Pcg32::seed_from_u64(7), 800.0, 600.0)
            .unwrap();

        assert_eq!(sky.frames(), 0);
        assert_eq!(sky.field().stars.len(), 100);
        assert_eq!(
            page.canvas.commands,
            vec![DrawCommand::Resize {
                width: 800.0,
                height: 600.0
            }]
        );
        assert!(!page.quote.text.is_empty());
        assert_eq!(page.shuffle, SHUFFLE_ID);
    }
}
