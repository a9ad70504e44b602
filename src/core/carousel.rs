//! Carousel geometry and navigation.
//!
//! The carousel is a pure state machine over one continuous variable, the
//! horizontal offset of the card strip (always ≤ 0). Next/Previous/Resize
//! are deterministic clamp functions, so layout and navigation can be unit
//! tested without any rendered page.

/// Gap between neighboring cards, px.
pub const CARD_GAP: f64 = 24.0;
/// Horizontal space reserved for the prev/next controls, px.
pub const CONTROLS_RESERVE: f64 = 96.0;
/// Smallest container width that shows three cards, px.
pub const THREE_COLUMN_MIN: f64 = 1200.0;
/// Smallest container width that shows two cards, px.
pub const TWO_COLUMN_MIN: f64 = 768.0;

/// Transient carousel state. `card_width` and `max_offset` are derived from
/// the stored fields on demand and never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselState {
    card_count: usize,
    container_width: f64,
    offset: f64,
}

/// The three transitions the carousel understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    Next,
    Previous,
    Resize { container_width: f64 },
}

impl CarouselState {
    /// A fresh carousel always starts at offset 0.
    pub fn new(card_count: usize, container_width: f64) -> Self {
        Self {
            card_count,
            container_width,
            offset: 0.0,
        }
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Current horizontal translation of the card strip, px. Invariant:
    /// `max_offset() <= offset() <= 0`.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Card width under the responsive column policy: three columns from
    /// 1200 px, two from 768 px, otherwise one full-width card.
    pub fn card_width(&self) -> f64 {
        if self.container_width >= THREE_COLUMN_MIN {
            (self.container_width - 2.0 * CARD_GAP) / 3.0
        } else if self.container_width >= TWO_COLUMN_MIN {
            (self.container_width - CARD_GAP) / 2.0
        } else {
            self.container_width
        }
    }

    pub fn visible_cards(&self) -> usize {
        if self.container_width >= THREE_COLUMN_MIN {
            3
        } else if self.container_width >= TWO_COLUMN_MIN {
            2
        } else {
            1
        }
    }

    /// Distance one Next/Previous press moves the strip.
    pub fn step(&self) -> f64 {
        self.card_width() + CARD_GAP
    }

    pub fn total_width(&self) -> f64 {
        self.card_count as f64 * self.step()
    }

    pub fn visible_width(&self) -> f64 {
        self.container_width - CONTROLS_RESERVE
    }

    /// Most negative reachable offset. Clamped at zero when the whole strip
    /// fits inside the viewport, keeping the bound ≤ 0 unconditionally.
    pub fn max_offset(&self) -> f64 {
        -(self.total_width() - self.visible_width()).max(0.0)
    }

    pub fn prev_disabled(&self) -> bool {
        self.offset >= 0.0
    }

    pub fn next_disabled(&self) -> bool {
        self.offset <= self.max_offset()
    }

    /// Apply one transition and re-clamp. Resize deliberately forgets the
    /// previous position instead of trying to preserve it.
    pub fn apply(self, event: CarouselEvent) -> Self {
        let moved = match event {
            CarouselEvent::Next => Self {
                offset: self.offset - self.step(),
                ..self
            },
            CarouselEvent::Previous => Self {
                offset: self.offset + self.step(),
                ..self
            },
            CarouselEvent::Resize { container_width } => Self {
                container_width,
                offset: 0.0,
                ..self
            },
        };
        moved.clamped()
    }

    fn clamped(self) -> Self {
        Self {
            offset: self.offset.clamp(self.max_offset(), 0.0),
            ..self
        }
    }
}
