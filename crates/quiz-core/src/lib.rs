pub mod animate;
pub mod answer;
pub mod camera;
pub mod config;
pub mod constants;
pub mod countries;
pub mod error;
pub mod host;
pub mod quiz;
pub mod selector;

pub use animate::{Animated, SpringConfig, Wrap};
pub use answer::{is_correct, normalize, Verdict};
pub use camera::{lat_lon_to_unit, CameraFrame, CameraRig, CameraUniform};
pub use config::{FailurePolicy, QuizConfig};
pub use countries::{Countries, Country, Highlight, Scale, COUNTRIES};
pub use error::{QuizError, QuizResult};
pub use host::{apply_all, Host};
pub use quiz::{Effect, Event, Loaded, Phase, Quiz, Resource};
pub use selector::{resolve_candidate, CountrySelector, Pick};
