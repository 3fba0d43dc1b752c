//! Photo albums shown on the gallery page.

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub url: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryAlbum {
    pub event: &'static str,
    pub images: &'static [GalleryImage],
}

/// Albums to display, every album when `filter` is `None`.
pub fn filter_albums(filter: Option<&str>) -> Vec<&'static GalleryAlbum> {
    GALLERY
        .iter()
        .filter(|album| filter.map_or(true, |event| album.event == event))
        .collect()
}

pub static GALLERY: &[GalleryAlbum] = &[
    GalleryAlbum {
        event: "AI Innovation Summit 2025",
        images: &[
            GalleryImage {
                url: "https://images.pexels.com/photos/2774556/pexels-photo-2774556.jpeg?auto=compress&cs=tinysrgb&w=800",
                caption: "Opening ceremony keynote",
            },
            GalleryImage {
                url: "https://images.pexels.com/photos/3184292/pexels-photo-3184292.jpeg?auto=compress&cs=tinysrgb&w=800",
                caption: "Networking session",
            },
            GalleryImage {
                url: "https://images.pexels.com/photos/8439093/pexels-photo-8439093.jpeg?auto=compress&cs=tinysrgb&w=800",
                caption: "Workshop in progress",
            },
            GalleryImage {
                url: "https://images.pexels.com/photos/3861969/pexels-photo-3861969.jpeg?auto=compress&cs=tinysrgb&w=800",
                caption: "Panel discussion",
            },
        ],
    },
    GalleryAlbum {
        event: "Machine Learning Workshop",
        images: &[
            GalleryImage {
                url: "https://images.pexels.com/photos/1181263/pexels-photo-1181263.jpeg?auto=compress&cs=tinysrgb&w=800",
                caption: "Hands-on coding session",
            },
            GalleryImage {
                url: "https://images.pexels.com/photos/5474294/pexels-photo-5474294.jpeg?auto=compress&cs=tinysrgb&w=800",
                caption: "Team collaboration",
            },
            GalleryImage {
                url: "https://images.pexels.com/photos/3183197/pexels-photo-3183197.jpeg?auto=compress&cs=tinysrgb&w=800",
                caption: "Project presentations",
            },
        ],
    },
    GalleryAlbum {
        event: "Computer Vision Hackathon",
        images: &[
            GalleryImage {
                url: "https://images.pexels.com/photos/8438918/pexels-photo-8438918.jpeg?auto=compress&cs=tinysrgb&w=800",
                caption: "Hackathon kickoff",
            },
            GalleryImage {
                url: "https://images.pexels.com/photos/1181376/pexels-photo-1181376.jpeg?auto=compress&cs=tinysrgb&w=800",
                caption: "Late night coding",
            },
            GalleryImage {
                url: "https://images.pexels.com/photos/3183150/pexels-photo-3183150.jpeg?auto=compress&cs=tinysrgb&w=800",
                caption: "Final demos",
            },
            GalleryImage {
                url: "https://images.pexels.com/photos/3184360/pexels-photo-3184360.jpeg?auto=compress&cs=tinysrgb&w=800",
                caption: "Award ceremony",
            },
            GalleryImage {
                url: "https://images.pexels.com/photos/3182755/pexels-photo-3182755.jpeg?auto=compress&cs=tinysrgb&w=800",
                caption: "Team photo",
            },
        ],
    },
    GalleryAlbum {
        event: "AI Ethics Discussion",
        images: &[
            GalleryImage {
                url: "https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg?auto=compress&cs=tinysrgb&w=800",
                caption: "Expert panel",
            },
            GalleryImage {
                url: "https://images.pexels.com/photos/3184639/pexels-photo-3184639.jpeg?auto=compress&cs=tinysrgb&w=800",
                caption: "Q&A session",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_albums_without_filter_returns_all() {
        assert_eq!(filter_albums(None).len(), GALLERY.len());
    }

    #[test]
    fn test_filter_albums_by_event() {
        let albums = filter_albums(Some("Machine Learning Workshop"));
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].images.len(), 3);
    }

    #[test]
    fn test_filter_albums_unknown_event_is_empty() {
        assert!(filter_albums(Some("Robotics Night")).is_empty());
    }
}
