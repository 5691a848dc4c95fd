//! The listing record shown on the main view

use super::photo::{PhotoEntry, LISTING_PHOTOS};
use serde::Serialize;

/// Headline number with its label ("2 Beds")
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Fact {
    pub value: &'static str,
    pub label: &'static str,
}

/// "Label: value" row
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AgentNote {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DisclosureSection {
    pub heading: &'static str,
    pub items: Vec<&'static str>,
}

/// Named point on the neighborhood map
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Landmark {
    pub name: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Neighborhood {
    pub landmarks: Vec<Landmark>,
    pub blurb: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Comparable {
    pub photo: PhotoEntry,
    pub title: &'static str,
    pub price: &'static str,
    pub details: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Agent {
    pub name: &'static str,
    pub role: &'static str,
    pub availability: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PaymentEstimate {
    pub amount: &'static str,
    pub footnote: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub title: &'static str,
    pub badge: &'static str,
    pub photos: &'static [PhotoEntry],
    pub facts: Vec<Fact>,
    pub details: Vec<DetailRow>,
    pub description: Vec<&'static str>,
    pub agent_notes: Vec<AgentNote>,
    pub disclosures: Vec<DisclosureSection>,
    pub neighborhood: Neighborhood,
    pub comparables: Vec<Comparable>,
    pub agent: Agent,
    pub payment: PaymentEstimate,
    pub credit: &'static str,
}

impl Listing {
    pub fn starkfield() -> Self {
        Self {
            title: "Starkfield Farmhouse Listing",
            badge: "Off Market",
            photos: &LISTING_PHOTOS,
            facts: vec![
                Fact { value: "2", label: "Beds" },
                Fact { value: "1", label: "Bath" },
                Fact { value: "1,847", label: "Sqft" },
                Fact { value: "100", label: "Winters" },
            ],
            details: vec![
                DetailRow { label: "Heat", value: "Inadequate" },
                DetailRow { label: "Lot Size", value: "Endless isolation" },
                DetailRow { label: "HOA", value: "Social pressure" },
                DetailRow { label: "Year Built", value: "1911" },
                DetailRow { label: "Property Type", value: "Single Family (Trapped)" },
                DetailRow { label: "Heating", value: "Wood stove, resentment" },
            ],
            description: vec![
                "This historic Starkfield farmhouse offers a rare chance to own a piece of authentic New England endurance. Nestled in a landscape where winter appears to have signed a long-term lease, the home features original hardwood floors polished smooth by years of pacing, brooding, and reconsidering life choices. The windows look out onto a tranquil expanse of snow, trees, and absolutely nothing else.",
                "The kitchen functions as the emotional and logistical center of the house. It is fully equipped for silent meals, restrained arguments, and the careful handling of fragile heirlooms. Thoughtful updates include sturdier doors, improved structural support, and a layout that encourages quiet reflection on what might have been.",
                "A gently sloping hill behind the property provides convenient sledding access, historically associated with moments of poor judgment and permanent consequences. Additional highlights include heating that builds character, a spare bedroom well-suited for unexpected guests who stay too long, and views that inspire deep contemplation of duty and restraint.",
                "The home comes furnished with a strong sense of responsibility, a collection of unresolved tensions, and the comforting knowledge that leaving is harder than it looks. Previous occupants remained for life, which speaks either to the property\u{2019}s charm or its effectiveness.",
                "Ideal for buyers seeking timeless craftsmanship, rural solitude, and a home that understands disappointment. Pickle dish not included.",
            ],
            agent_notes: vec![
                AgentNote {
                    heading: "Showing Instructions",
                    body: "Viewings available during daylight hours only. Bring extra layers; the cold here goes deeper than the thermometer suggests. Do not mention happier times.",
                },
                AgentNote {
                    heading: "Occupancy",
                    body: "Owner-occupied by three souls in various states of resigned cohabitation. Current residents may appear to be present but are emotionally unavailable.",
                },
                AgentNote {
                    heading: "Special Conditions",
                    body: "No sudden sledding. Please respect the elm tree. Red accessories trigger strong emotional responses and are discouraged during viewings.",
                },
            ],
            disclosures: vec![
                DisclosureSection {
                    heading: "Material Defects",
                    items: vec![
                        "Known history of shattered pickle dish (irreparable)",
                        "Structural integrity of marriage: compromised",
                        "Foundation built on duty rather than choice",
                        "Windows seal in despair more effectively than cold",
                    ],
                },
                DisclosureSection {
                    heading: "Environmental Hazards",
                    items: vec![
                        "Seasonal hazard: Downhill run ending at an elm tree",
                        "Prolonged exposure to silence and snow",
                        "Toxic atmosphere of unspoken longing",
                        "High concentration of suppressed desires",
                    ],
                },
                DisclosureSection {
                    heading: "Historical Significance",
                    items: vec![
                        "Site of profound romantic restraint (1911)",
                        "Documented case of emotional frostbite",
                        "Preserved as monument to obligation",
                        "Listed on Register of Quiet Tragedies",
                    ],
                },
            ],
            neighborhood: Neighborhood {
                landmarks: vec![
                    Landmark { name: "Frome Farm", note: "the property" },
                    Landmark { name: "Starkfield Center", note: "north-west of the farm" },
                    Landmark { name: "Church", note: "west along the main road" },
                    Landmark { name: "Sawmill", note: "south-east of the farm" },
                    Landmark { name: "The Hill", note: "north-east, sledding access" },
                    Landmark { name: "The Elm", note: "0.3 mi from the farm" },
                ],
                blurb: "Starkfield, Massachusetts - A community defined by endurance and the weight of winter. Local amenities include a church for solemn contemplation, a sawmill for grinding labor, and The Hill for life-altering mistakes. The elm tree serves as a permanent landmark of consequence.",
            },
            comparables: vec![
                Comparable {
                    photo: LISTING_PHOTOS[5],
                    title: "Corbury Junction Mill",
                    price: "Emotional Cost: Moderate",
                    details: "1 bd | 1 ba | 890 sqft",
                    description: "Transit stop for dreams deferred. Platform for farewells never spoken.",
                },
                Comparable {
                    photo: LISTING_PHOTOS[6],
                    title: "The Minister's House",
                    price: "Emotional Cost: Eternal",
                    details: "2 bd | 1 ba | 1,650 sqft",
                    description: "Overlooks cemetery. Daily reminders of mortality. Excellent for contemplating paths not taken.",
                },
                Comparable {
                    photo: LISTING_PHOTOS[7],
                    title: "The Hale Homestead",
                    price: "Emotional Cost: Severe",
                    details: "4 bd | 2 ba | 2,400 sqft",
                    description: "Multiple rooms for multiple resentments. Extra space for storing grudges.",
                },
                Comparable {
                    photo: LISTING_PHOTOS[8],
                    title: "The Varnum Place",
                    price: "Emotional Cost: High",
                    details: "3 bd | 1 ba | 2,100 sqft",
                    description: "Witness to tragedy. Close proximity to regret. Original moral framework intact.",
                },
            ],
            agent: Agent {
                name: "E. Wharton",
                role: "Realist Agent",
                availability: "Available for showings during brief moments of hope",
            },
            payment: PaymentEstimate {
                amount: "Your dignity",
                footnote: "Plus accumulated regrets",
            },
            credit: "built by Hao Lin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_shape() {
        let listing = Listing::starkfield();
        assert_eq!(listing.photos.len(), 9);
        assert_eq!(listing.facts.len(), 4);
        assert_eq!(listing.description.len(), 5);
        assert_eq!(listing.comparables.len(), 4);
        assert!(listing.disclosures.iter().all(|d| d.items.len() == 4));
    }

    #[test]
    fn test_comparable_photos_come_from_catalog() {
        let listing = Listing::starkfield();
        for comp in &listing.comparables {
            assert!(listing.photos.contains(&comp.photo));
        }
    }

    #[test]
    fn test_listing_serializes() {
        let json = serde_json::to_value(Listing::starkfield()).unwrap();
        assert_eq!(json["title"], "Starkfield Farmhouse Listing");
        assert_eq!(json["photos"][2]["source"], "/assets/winter-window.png");
    }
}
