//! Static event listings shown on the events pages.

use chrono::{DateTime, NaiveDate, Utc};

/// Date format used in event listings, e.g. `2026-12-15`.
const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct EventInfo {
    pub title: &'static str,
    pub description: &'static str,
    /// ISO date, see [`EventInfo::date`]
    pub date: &'static str,
    pub time: Option<&'static str>,
    pub location: &'static str,
    pub image: &'static str,
}

impl EventInfo {
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, EVENT_DATE_FORMAT).ok()
    }

    /// Long form date such as `December 15, 2026`, falling back to the raw value.
    pub fn formatted_date(&self) -> String {
        format_event_date(self.date)
    }
}

/// The event currently open for team registration.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedEvent {
    pub info: EventInfo,
    pub highlights: &'static [&'static str],
    pub closing_note: &'static str,
    /// Maximum number of teams accepted
    pub max_participants: u32,
    /// Registration closes at the start (UTC) of this ISO date
    pub registration_deadline: &'static str,
}

impl FeaturedEvent {
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        NaiveDate::parse_from_str(self.registration_deadline, EVENT_DATE_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|datetime| datetime.and_utc())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

impl Contact {
    /// `tel:` link target with formatting characters removed.
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }
}

pub fn format_event_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, EVENT_DATE_FORMAT) {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

pub static FEATURED_EVENT: FeaturedEvent = FeaturedEvent {
    info: EventInfo {
        title: "AI Innovation Summit 2026",
        description: "Join us for our flagship event featuring keynote speakers from leading AI companies, hands-on workshops, and networking opportunities. Explore the latest breakthroughs in machine learning, neural networks, and generative AI.",
        date: "2026-12-15",
        time: Some("9:00 AM - 6:00 PM"),
        location: "Tech Convention Center, Downtown",
        image: "https://images.pexels.com/photos/2774556/pexels-photo-2774556.jpeg?auto=compress&cs=tinysrgb&w=1200",
    },
    highlights: &[
        "Keynote speeches from AI pioneers and industry experts",
        "Hands-on workshops on ML frameworks and tools",
        "Panel discussions on AI ethics and future trends",
        "Networking sessions with recruiters from top tech companies",
        "Project showcase and competition with prizes",
        "Free lunch and refreshments throughout the day",
    ],
    closing_note: "Whether you're a beginner or an experienced AI enthusiast, this event offers something for everyone. Don't miss this opportunity to learn, network, and showcase your skills!",
    max_participants: 200,
    registration_deadline: "2026-12-10",
};

pub static UPCOMING_EVENTS: &[EventInfo] = &[
    EventInfo {
        title: "Machine Learning Workshop",
        description: "Hands-on workshop covering fundamentals of ML algorithms and practical implementations.",
        date: "2026-11-10",
        time: None,
        location: "University Lab 203",
        image: "https://images.pexels.com/photos/8439093/pexels-photo-8439093.jpeg?auto=compress&cs=tinysrgb&w=600",
    },
    EventInfo {
        title: "AI Ethics Panel Discussion",
        description: "Expert panel discussing the ethical implications and responsible development of AI systems.",
        date: "2026-11-22",
        time: None,
        location: "Virtual Event",
        image: "https://images.pexels.com/photos/3861969/pexels-photo-3861969.jpeg?auto=compress&cs=tinysrgb&w=600",
    },
    EventInfo {
        title: "Hackathon: Build with GPT",
        description: "24-hour hackathon focused on building innovative applications using GPT models.",
        date: "2026-12-01",
        time: None,
        location: "Innovation Hub",
        image: "https://images.pexels.com/photos/1181263/pexels-photo-1181263.jpeg?auto=compress&cs=tinysrgb&w=600",
    },
];

pub static PAST_EVENTS: &[EventInfo] = &[
    EventInfo {
        title: "Deep Learning Fundamentals",
        description: "Comprehensive workshop on neural networks and deep learning architectures.",
        date: "2026-09-15",
        time: None,
        location: "Computer Science Building",
        image: "https://images.pexels.com/photos/5474294/pexels-photo-5474294.jpeg?auto=compress&cs=tinysrgb&w=600",
    },
    EventInfo {
        title: "AI Career Fair",
        description: "Connect with top tech companies looking for AI talent.",
        date: "2026-08-20",
        time: None,
        location: "Campus Center",
        image: "https://images.pexels.com/photos/3184292/pexels-photo-3184292.jpeg?auto=compress&cs=tinysrgb&w=600",
    },
    EventInfo {
        title: "Computer Vision Workshop",
        description: "Learn about image processing, object detection, and face recognition.",
        date: "2026-07-10",
        time: None,
        location: "Engineering Lab",
        image: "https://images.pexels.com/photos/8438918/pexels-photo-8438918.jpeg?auto=compress&cs=tinysrgb&w=600",
    },
];

/// Webmasters listed on the event page for registration help.
pub static WEBMASTERS: &[Contact] = &[
    Contact {
        name: "John Doe",
        email: "john@brainium.com",
        phone: "+1 (555) 123-4567",
    },
    Contact {
        name: "Jane Smith",
        email: "jane@brainium.com",
        phone: "+1 (555) 987-6543",
    },
];

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn test_all_event_dates_parse() {
        assert!(FEATURED_EVENT.info.date().is_some());
        for event in UPCOMING_EVENTS.iter().chain(PAST_EVENTS.iter()) {
            assert!(event.date().is_some(), "unparsable date for {}", event.title);
        }
    }

    #[test]
    fn test_deadline_is_midnight_utc_before_event() {
        let deadline = FEATURED_EVENT.deadline().unwrap();
        assert_eq!(deadline.hour(), 0);
        assert_eq!(deadline.day(), 10);
        assert!(deadline.date_naive() < FEATURED_EVENT.info.date().unwrap());
    }

    #[test]
    fn test_format_event_date() {
        assert_eq!(format_event_date("2026-12-05"), "December 5, 2026");
        assert_eq!(format_event_date("soon"), "soon");
    }

    #[test]
    fn test_contact_phone_href_strips_formatting() {
        assert_eq!(WEBMASTERS[0].phone_href(), "tel:+15551234567");
    }
}
