//! Closed vocabularies of the IOF data standard 3.0.
//!
//! Every enumerated attribute or element value lives here, declared once.
//! Tokens are the exact strings of the standard; lookup is case-sensitive
//! and anything outside the set is rejected with [`IofError::InvalidToken`].

use serde::{Deserialize, Serialize};

use super::error::IofError;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident: $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $token)] $variant, )+
        }

        impl $name {
            /// Name of the vocabulary, used in error messages.
            pub const VOCABULARY: &'static str = $label;

            /// Every member, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The exact token used on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }

            /// Parse a wire token (case-sensitive).
            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = IofError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_token(s).ok_or_else(|| IofError::InvalidToken {
                    vocabulary: $label,
                    value: s.to_string(),
                })
            }
        }
    };
}

macro_rules! default_member {
    ($name:ident, $variant:ident) => {
        impl Default for $name {
            fn default() -> Self {
                Self::$variant
            }
        }
    };
}

vocabulary! {
    /// Sex of a person, or the sexes allowed in a class.
    Sex: "sex" {
        Male => "M",
        Female => "F",
        /// Both.
        Both => "B",
    }
}

vocabulary! {
    /// Kind of contact information.
    ContactType: "contact type" {
        PhoneNumber => "PhoneNumber",
        MobilePhoneNumber => "MobilePhoneNumber",
        FaxNumber => "FaxNumber",
        EmailAddress => "EmailAddress",
        WebAddress => "WebAddress",
        Other => "Other",
    }
}

vocabulary! {
    /// Hierarchical level of an organisation.
    OrganisationType: "organisation type" {
        Iof => "IOF",
        IofRegion => "IOFRegion",
        NationalFederation => "NationalFederation",
        NationalRegion => "NationalRegion",
        Club => "Club",
        School => "School",
        Company => "Company",
        Military => "Military",
        Other => "Other",
    }
}

vocabulary! {
    /// Whether a fee is the normal or the late entry fee.
    FeeType: "fee type" {
        Normal => "Normal",
        Late => "Late",
    }
}
default_member!(FeeType, Normal);

vocabulary! {
    /// Overall status of a class in an event.
    EventClassStatus: "event class status" {
        Normal => "Normal",
        /// Divided into two or more classes due to many entries.
        Divided => "Divided",
        /// Joined with another class due to few entries.
        Joined => "Joined",
        /// Results invalid; entry fees are not refunded.
        Invalidated => "Invalidated",
        /// Results invalid; entry fees are refunded.
        InvalidatedNoFee => "InvalidatedNoFee",
    }
}
default_member!(EventClassStatus, Normal);

vocabulary! {
    /// Status of a class in a particular race.
    RaceClassStatus: "race class status" {
        StartTimesNotAllocated => "StartTimesNotAllocated",
        StartTimesAllocated => "StartTimesAllocated",
        NotUsed => "NotUsed",
        Completed => "Completed",
        Invalidated => "Invalidated",
        InvalidatedNoFee => "InvalidatedNoFee",
    }
}

vocabulary! {
    /// What a result list shows for a class and how it is sorted.
    ResultListMode: "result list mode" {
        /// Place and time, ordered by place.
        Default => "Default",
        /// Place and time, not ordered by time.
        Unordered => "Unordered",
        /// Neither places nor times.
        UnorderedNoTimes => "UnorderedNoTimes",
    }
}
default_member!(ResultListMode, Default);

vocabulary! {
    /// Role of a control on a course.
    ControlType: "control type" {
        Control => "Control",
        Start => "Start",
        Finish => "Finish",
        CrossingPoint => "CrossingPoint",
        EndOfMarkedRoute => "EndOfMarkedRoute",
    }
}
default_member!(ControlType, Control);

vocabulary! {
    /// Unit of a map coordinate.
    MapUnit: "map unit" {
        /// Printed map.
        Millimeters => "mm",
        /// Digital image.
        Pixels => "px",
    }
}
default_member!(MapUnit, Millimeters);

vocabulary! {
    /// Outcome of a competitor in a race.
    ResultStatus: "result status" {
        Ok => "OK",
        Finished => "Finished",
        MissingPunch => "MissingPunch",
        Disqualified => "Disqualified",
        DidNotFinish => "DidNotFinish",
        Active => "Active",
        Inactive => "Inactive",
        OverTime => "OverTime",
        SportingWithdrawal => "SportingWithdrawal",
        NotCompeting => "NotCompeting",
        Moved => "Moved",
        MovedUp => "MovedUp",
        DidNotStart => "DidNotStart",
        DidNotEnter => "DidNotEnter",
        Cancelled => "Cancelled",
    }
}

vocabulary! {
    /// Sanctioning status of an event or race.
    EventStatus: "event status" {
        Planned => "Planned",
        Applied => "Applied",
        Proposed => "Proposed",
        Sanctioned => "Sanctioned",
        Canceled => "Canceled",
        Rescheduled => "Rescheduled",
    }
}

vocabulary! {
    /// Level of an event or race.
    EventClassification: "event classification" {
        International => "International",
        National => "National",
        Regional => "Regional",
        Local => "Local",
        Club => "Club",
    }
}

vocabulary! {
    EventForm: "event form" {
        Individual => "Individual",
        Team => "Team",
        Relay => "Relay",
    }
}

vocabulary! {
    RaceDiscipline: "race discipline" {
        Sprint => "Sprint",
        Middle => "Middle",
        Long => "Long",
        Ultralong => "Ultralong",
        Other => "Other",
    }
}

vocabulary! {
    /// What an event URL points to.
    EventUrlType: "event URL type" {
        Website => "Website",
        StartList => "StartList",
        ResultList => "ResultList",
        Other => "Other",
    }
}

vocabulary! {
    /// Completeness of a result list document.
    ResultListStatus: "result list status" {
        Complete => "Complete",
        Delta => "Delta",
        Snapshot => "Snapshot",
    }
}
default_member!(ResultListStatus, Complete);

vocabulary! {
    /// Deviation of a split time from the planned course.
    SplitTimeStatus: "split time status" {
        /// Control on the course that was not punched.
        Missing => "Missing",
        /// Punch not belonging to the course.
        Additional => "Additional",
    }
}

vocabulary! {
    /// Whether a relay time behind or position refers to the leg or the course.
    RankingScope: "ranking scope" {
        Leg => "Leg",
        Course => "Course",
    }
}

vocabulary! {
    StartTimeAllocationRequestType: "start time allocation request type" {
        Normal => "Normal",
        EarlyStart => "EarlyStart",
        LateStart => "LateStart",
        SeparatedFrom => "SeparatedFrom",
        GroupedWith => "GroupedWith",
    }
}
default_member!(StartTimeAllocationRequestType, Normal);

vocabulary! {
    /// Marking between a course control and the next one.
    SpecialInstruction: "special instruction" {
        NoInstruction => "None",
        TapedRoute => "TapedRoute",
        FunnelTapedRoute => "FunnelTapedRoute",
        MandatoryCrossingPoint => "MandatoryCrossingPoint",
        MandatoryOutOfBoundsAreaPassage => "MandatoryOutOfBoundsAreaPassage",
    }
}
default_member!(SpecialInstruction, NoInstruction);
