pub mod accessor;
pub mod chain;
pub mod dispatch;
pub mod fields;
pub mod implementor;

pub use implementor::*;

use crate::prelude::*;
use podgen_model::ModelError;

///
/// ClassGen
///
/// Emits the full expansion for one class: the data struct, its static
/// accessors, and the dynamic accessor surface.
///

pub struct ClassGen<'a>(pub &'a Class);

impl ClassGen<'_> {
    pub fn generate(&self) -> Result<TokenStream, ModelError> {
        let class = self.0;

        let type_part = fields::type_part(class);
        let accessors = fields::accessor_part(class)?;
        let dynamic = accessor::synthesize(class)?;

        // quote
        Ok(quote! {
            #type_part
            #accessors
            #dynamic
        })
    }
}
