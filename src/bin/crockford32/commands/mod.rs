pub mod decode;
pub mod encode;
pub mod normalize;
pub mod validate;
