//! Filter evaluator
//!
//! Applies a filter specification to an event collection, producing the
//! ordered subset matching all active criteria. Filtering is stable (original
//! relative order, no re-sort), the all-empty filter is the identity, and
//! applying the same filter twice is idempotent.

use chrono::NaiveDate;

use crate::models::Event;

/// Date criterion of a filter.
///
/// Exact-day and inclusive-range matching are both supported; the mode is
/// selected by which fields the caller populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    Any,
    /// Events on exactly this calendar day (UTC)
    Exact(NaiveDate),
    /// Events within the inclusive range; either bound may be open
    Range {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl DateFilter {
    fn matches(&self, date: NaiveDate) -> bool {
        match self {
            DateFilter::Any => true,
            DateFilter::Exact(day) => date == *day,
            DateFilter::Range { from, to } => {
                from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
            }
        }
    }

    fn is_empty(&self) -> bool {
        matches!(
            self,
            DateFilter::Any
                | DateFilter::Range {
                    from: None,
                    to: None
                }
        )
    }
}

/// Filter specification for the event board.
///
/// A category or city id of 0 means "no filter"; empty text matches all.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub text: String,
    pub category_id: i64,
    pub city_id: i64,
    pub date: DateFilter,
}

impl EventFilter {
    /// Filter matching everything
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn with_city(mut self, city_id: i64) -> Self {
        self.city_id = city_id;
        self
    }

    pub fn on_day(mut self, day: NaiveDate) -> Self {
        self.date = DateFilter::Exact(day);
        self
    }

    pub fn between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date = DateFilter::Range { from, to };
        self
    }

    /// Whether no criterion is active
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
            && self.category_id == 0
            && self.city_id == 0
            && self.date.is_empty()
    }

    /// Whether a single event passes all active criteria
    pub fn matches(&self, event: &Event) -> bool {
        let text = self.text.trim().to_lowercase();
        if !text.is_empty() {
            let in_title = event.title.to_lowercase().contains(&text);
            let in_description = event
                .description
                .as_ref()
                .map_or(false, |d| d.to_lowercase().contains(&text));
            let in_restaurant = event.restaurant.name.to_lowercase().contains(&text);
            if !in_title && !in_description && !in_restaurant {
                return false;
            }
        }

        if self.category_id > 0 && event.category.id != self.category_id {
            return false;
        }

        if self.city_id > 0
            && event
                .restaurant
                .city
                .as_ref()
                .map_or(true, |c| c.id != self.city_id)
        {
            return false;
        }

        self.date.matches(event.event_date.date_naive())
    }

    /// Apply the filter, preserving the input's relative order
    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        if self.is_empty() {
            return events.to_vec();
        }
        events
            .iter()
            .filter(|evt| self.matches(evt))
            .cloned()
            .collect()
    }
}
