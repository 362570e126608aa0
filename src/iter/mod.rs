mod inorder;
mod into_iter;
mod postorder;
mod preorder;

pub use inorder::*;
pub use into_iter::*;
pub use postorder::*;
pub use preorder::*;
