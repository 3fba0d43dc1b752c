//! Club teams shown on the about page.

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub photo: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub name: &'static str,
    pub members: &'static [TeamMember],
}

pub static TEAMS: &[Team] = &[
    Team {
        name: "Tech Team",
        members: &[
            TeamMember {
                name: "Alex Chen",
                role: "Lead Developer",
                photo: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=400",
            },
            TeamMember {
                name: "Sarah Johnson",
                role: "ML Engineer",
                photo: "https://images.pexels.com/photos/3727459/pexels-photo-3727459.jpeg?auto=compress&cs=tinysrgb&w=400",
            },
            TeamMember {
                name: "Raj Patel",
                role: "AI Researcher",
                photo: "https://images.pexels.com/photos/2182970/pexels-photo-2182970.jpeg?auto=compress&cs=tinysrgb&w=400",
            },
            TeamMember {
                name: "Emma Wilson",
                role: "Backend Developer",
                photo: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=400",
            },
        ],
    },
    Team {
        name: "Marketing Team",
        members: &[
            TeamMember {
                name: "Michael Brown",
                role: "Marketing Lead",
                photo: "https://images.pexels.com/photos/2102415/pexels-photo-2102415.jpeg?auto=compress&cs=tinysrgb&w=400",
            },
            TeamMember {
                name: "Lisa Anderson",
                role: "Social Media Manager",
                photo: "https://images.pexels.com/photos/3763188/pexels-photo-3763188.jpeg?auto=compress&cs=tinysrgb&w=400",
            },
            TeamMember {
                name: "David Lee",
                role: "Content Strategist",
                photo: "https://images.pexels.com/photos/2379005/pexels-photo-2379005.jpeg?auto=compress&cs=tinysrgb&w=400",
            },
        ],
    },
    Team {
        name: "Design Team",
        members: &[
            TeamMember {
                name: "Sophie Turner",
                role: "UI/UX Lead",
                photo: "https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg?auto=compress&cs=tinysrgb&w=400",
            },
            TeamMember {
                name: "James Martinez",
                role: "Graphic Designer",
                photo: "https://images.pexels.com/photos/2613260/pexels-photo-2613260.jpeg?auto=compress&cs=tinysrgb&w=400",
            },
            TeamMember {
                name: "Olivia Garcia",
                role: "Brand Designer",
                photo: "https://images.pexels.com/photos/1181690/pexels-photo-1181690.jpeg?auto=compress&cs=tinysrgb&w=400",
            },
        ],
    },
    Team {
        name: "Sponsor Team",
        members: &[
            TeamMember {
                name: "Robert Taylor",
                role: "Sponsorship Director",
                photo: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=400",
            },
            TeamMember {
                name: "Amanda White",
                role: "Partnership Manager",
                photo: "https://images.pexels.com/photos/3756681/pexels-photo-3756681.jpeg?auto=compress&cs=tinysrgb&w=400",
            },
        ],
    },
];
