mod classifier;

pub use classifier::{
    OriginClassifier, OriginDecision, PUBLIC_KEY_PREFIX, STATIC_PAGES_KEY_PREFIX,
    STATIC_PATH_PREFIXES,
};
