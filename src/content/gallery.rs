//! Gallery photos, addressed by numeric id.

#[derive(Debug)]
pub struct Photo {
    pub id: u32,
    pub title: &'static str,
    /// One line, shown on the grid and in the modal.
    pub summary: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    pub category: &'static str,
    pub details: Details,
}

#[derive(Debug)]
pub struct Details {
    pub location: &'static str,
    pub camera: &'static str,
    pub settings: &'static str,
    pub date: &'static str,
}

/// The photo at `/gallery/{id}`. Ids are plain decimal, so `"01"` and
/// `"+1"` are not found.
pub fn find(id: &str) -> Option<&'static Photo> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) || id.starts_with('0') {
        return None;
    }
    let id: u32 = id.parse().ok()?;
    PHOTOS.iter().find(|photo| photo.id == id)
}

pub const PHOTOS: &[Photo] = &[
    Photo {
        id: 1,
        title: "Mountain Landscape",
        summary: "Beautiful mountain view with snow-capped peaks",
        description: "Beautiful mountain view with snow-capped peaks stretching as far as the eye can see. This breathtaking landscape captures the majesty of nature in its purest form.",
        thumbnail: "🏔️",
        category: "Nature",
        details: Details {
            location: "Swiss Alps",
            camera: "Canon EOS R5",
            settings: "f/8, 1/250s, ISO 100",
            date: "March 15, 2024",
        },
    },
    Photo {
        id: 2,
        title: "Ocean Sunset",
        summary: "Stunning sunset over the ocean waves",
        description: "Stunning sunset over the ocean waves with vibrant colors painting the sky. The golden hour creates a perfect reflection on the water surface.",
        thumbnail: "🌅",
        category: "Nature",
        details: Details {
            location: "Malibu Beach, California",
            camera: "Sony A7R IV",
            settings: "f/11, 1/60s, ISO 200",
            date: "June 22, 2024",
        },
    },
    Photo {
        id: 3,
        title: "City Skyline",
        summary: "Modern city skyline at night with lights",
        description: "Modern city skyline at night with lights creating a spectacular urban landscape. The architecture tells the story of human achievement.",
        thumbnail: "🏙️",
        category: "Urban",
        details: Details {
            location: "New York City",
            camera: "Nikon Z9",
            settings: "f/5.6, 2s, ISO 400",
            date: "September 10, 2024",
        },
    },
    Photo {
        id: 4,
        title: "Forest Path",
        summary: "Peaceful walking path through dense forest",
        description: "Peaceful walking path through dense forest with dappled sunlight filtering through the canopy. Nature's cathedral invites quiet contemplation.",
        thumbnail: "🌲",
        category: "Nature",
        details: Details {
            location: "Olympic National Park",
            camera: "Fujifilm X-T5",
            settings: "f/4, 1/125s, ISO 800",
            date: "August 5, 2024",
        },
    },
    Photo {
        id: 5,
        title: "Desert Dunes",
        summary: "Golden sand dunes in the desert",
        description: "Golden sand dunes in the desert creating flowing patterns shaped by wind and time. The minimalist beauty of the arid landscape.",
        thumbnail: "🏜️",
        category: "Nature",
        details: Details {
            location: "Sahara Desert, Morocco",
            camera: "Canon EOS R6",
            settings: "f/16, 1/500s, ISO 100",
            date: "November 18, 2024",
        },
    },
    Photo {
        id: 6,
        title: "Space View",
        summary: "Earth view from space with stars",
        description: "Earth view from space with stars scattered across the cosmic backdrop. Our blue marble suspended in the infinite darkness.",
        thumbnail: "🌍",
        category: "Space",
        details: Details {
            location: "International Space Station",
            camera: "Nikon D5",
            settings: "f/2.8, 1/4000s, ISO 1600",
            date: "December 1, 2024",
        },
    },
    Photo {
        id: 7,
        title: "Tropical Beach",
        summary: "Crystal clear water and white sand beach",
        description: "Crystal clear water and white sand beach with palm trees swaying in the gentle breeze. Paradise found in this tropical haven.",
        thumbnail: "🏖️",
        category: "Nature",
        details: Details {
            location: "Maldives",
            camera: "Sony A7 III",
            settings: "f/8, 1/320s, ISO 100",
            date: "February 14, 2024",
        },
    },
    Photo {
        id: 8,
        title: "Northern Lights",
        summary: "Aurora borealis dancing in the night sky",
        description: "Aurora borealis dancing in the night sky with ethereal green curtains of light. Nature's most spectacular light show.",
        thumbnail: "🌌",
        category: "Nature",
        details: Details {
            location: "Iceland",
            camera: "Canon EOS R5",
            settings: "f/2.8, 15s, ISO 3200",
            date: "January 20, 2024",
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_one_through_eight() {
        let ids: Vec<u32> = PHOTOS.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
        assert_eq!(find("3").map(|p| p.title), Some("City Skyline"));
    }

    #[test]
    fn non_canonical_ids_are_not_found() {
        for id in ["0", "9", "03", "+3", "-1", "", "three", "99999999999"] {
            assert!(find(id).is_none(), "{id:?}");
        }
    }
}
