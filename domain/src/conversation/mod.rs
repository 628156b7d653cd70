//! Guided conversation domain.
//!
//! - [`step::Step`] / [`step::StepFlow`]: the closed step enumeration and its transition table
//! - [`answers::AnswerSet`]: parsed answers keyed by step
//! - [`question::StepQuestion`]: fixed question texts
//! - [`question::RenderInstruction`]: what the front-end displays on entering a step

pub mod answers;
pub mod question;
pub mod step;
