/*
[INPUT]:  Helper handle and UI observation requirements
[OUTPUT]: Observable session facade over the helper SDK
[POS]:    Session layer - adapter between SDK and observers
[UPDATE]: When facade operations or the published state change
*/

pub mod facade;

pub use facade::SessionFacade;
