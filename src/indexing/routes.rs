use super::msgs::{
    MSG_BURN, MSG_DISABLE_MINT, MSG_ISSUE, MSG_MINT, MSG_SET_AUTHORITY, MSG_SET_MINTER,
    MSG_SET_URI,
};
use log::debug;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Issue,
    Mint,
    Burn,
    SetMinter,
    SetAuthority,
    SetUri,
    DisableMint,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::Issue,
        EventKind::Mint,
        EventKind::Burn,
        EventKind::SetMinter,
        EventKind::SetAuthority,
        EventKind::SetUri,
        EventKind::DisableMint,
    ];

    /// Name used in error diagnostics.
    pub fn handler_name(&self) -> &'static str {
        match self {
            EventKind::Issue => "eventIssue",
            EventKind::Mint => "eventMint",
            EventKind::Burn => "eventBurn",
            EventKind::SetMinter => "eventSetMinter",
            EventKind::SetAuthority => "eventSetAuthority",
            EventKind::SetUri => "eventSetUri",
            EventKind::DisableMint => "eventDisableMint",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.handler_name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub event_type: &'static str,
    pub msg_type: &'static str,
    pub kind: EventKind,
}

pub static FANTOKEN_ROUTES: [Route; 7] = [
    Route {
        event_type: "bitsong.fantoken.v1beta1.EventIssue",
        msg_type: MSG_ISSUE,
        kind: EventKind::Issue,
    },
    Route {
        event_type: "bitsong.fantoken.v1beta1.EventMint",
        msg_type: MSG_MINT,
        kind: EventKind::Mint,
    },
    Route {
        event_type: "bitsong.fantoken.v1beta1.EventBurn",
        msg_type: MSG_BURN,
        kind: EventKind::Burn,
    },
    Route {
        event_type: "bitsong.fantoken.v1beta1.EventSetMinter",
        msg_type: MSG_SET_MINTER,
        kind: EventKind::SetMinter,
    },
    Route {
        event_type: "bitsong.fantoken.v1beta1.EventSetAuthority",
        msg_type: MSG_SET_AUTHORITY,
        kind: EventKind::SetAuthority,
    },
    Route {
        event_type: "bitsong.fantoken.v1beta1.EventSetUri",
        msg_type: MSG_SET_URI,
        kind: EventKind::SetUri,
    },
    Route {
        event_type: "bitsong.fantoken.v1beta1.EventDisableMint",
        msg_type: MSG_DISABLE_MINT,
        kind: EventKind::DisableMint,
    },
];

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RegistryKey {
    event_type: String,
    msg_type: String,
}

impl RegistryKey {
    pub fn new(event_type: &str, msg_type: &str) -> Self {
        RegistryKey {
            event_type: event_type.to_string(),
            msg_type: msg_type.to_string(),
        }
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} <- {}", self.event_type, self.msg_type)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("route for {0} has an empty event or message type")]
    EmptyType(EventKind),
    #[error("duplicate route {0}")]
    DuplicateRoute(RegistryKey),
    #[error("{0} is routed more than once")]
    DuplicateKind(EventKind),
    #[error("no route for {0}")]
    MissingKind(EventKind),
}

/// Maps an (event type, message type) pair to the handler that projects it.
#[derive(Debug)]
pub struct RouteTable {
    handlers: HashMap<RegistryKey, EventKind>,
}

impl RouteTable {
    /// Every event kind must be routed exactly once.
    pub fn new(routes: &[Route]) -> Result<Self, RouteError> {
        let mut handlers = HashMap::new();
        let mut kinds = Vec::with_capacity(routes.len());
        for route in routes {
            if route.event_type.is_empty() || route.msg_type.is_empty() {
                return Err(RouteError::EmptyType(route.kind));
            }
            if kinds.contains(&route.kind) {
                return Err(RouteError::DuplicateKind(route.kind));
            }
            let key = RegistryKey::new(route.event_type, route.msg_type);
            if handlers.contains_key(&key) {
                return Err(RouteError::DuplicateRoute(key));
            }
            debug!("registering {} for {}", key, route.kind);
            handlers.insert(key, route.kind);
            kinds.push(route.kind);
        }
        for kind in EventKind::ALL {
            if !kinds.contains(&kind) {
                return Err(RouteError::MissingKind(kind));
            }
        }
        Ok(RouteTable { handlers })
    }

    pub fn resolve(&self, event_type: &str, msg_type: &str) -> Option<EventKind> {
        self.handlers
            .get(&RegistryKey::new(event_type, msg_type))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
