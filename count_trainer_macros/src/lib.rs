use proc_macro::TokenStream as TokenStream1;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{self, parse_quote};

/// This macro is added before a method of `Trainer` struct in the impl block.
/// Use this macro to first check if current game phase is exactly the phase in
/// the attribute.
///
/// For example, `#[allowed_phase(PlayerTurn)]` will make a method first check
/// if current game phase is `PlayerTurn`. If not, the method will return
/// `TrainerError::WrongPhase` before touching any state.
#[proc_macro_attribute]
pub fn allowed_phase(attr: TokenStream1, item: TokenStream1) -> TokenStream1 {
    let mut ast: syn::ImplItemFn = match syn::parse(item) {
        Ok(ast) => ast,
        Err(err) => return err.to_compile_error().into(),
    };
    let phase: syn::Ident = match syn::parse(attr) {
        Ok(phase) => phase,
        Err(err) => return err.to_compile_error().into(),
    };

    let early_return = phase_check(&phase, &ast.sig.ident.to_string());
    ast.block.stmts.insert(0, early_return);
    ast.into_token_stream().into()
}

fn phase_check(phase: &syn::Ident, function_name: &str) -> syn::Stmt {
    let allowed = phase.to_string();
    let error: TokenStream2 = quote! {
        crate::TrainerError::WrongPhase {
            operation: #function_name,
            allowed: #allowed,
        }
    };
    parse_quote! {
        if self.current_game_phase != crate::simulation::GamePhase::#phase {
            return Err(#error);
        }
    }
}
