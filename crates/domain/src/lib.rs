//! `gestao-domain` — the business record types.
//!
//! One module per table. Each record type carries its read schema (the record
//! itself), its create/update schemas, and an explicitly authored column
//! table in declaration order. The column tables are what the registry and
//! the metadata introspector consume; nothing here is inspected at runtime.

pub mod cadastro;
pub mod conta;
pub mod empresa;
pub mod embalagem;
pub mod enums;
pub mod estoque;
pub mod pedido;
pub mod produto;
pub mod tributacao;
pub mod usuario;

pub use cadastro::{Cadastro, CadastroCreate, CadastroUpdate};
pub use conta::{Conta, ContaCreate, ContaUpdate};
pub use embalagem::{Embalagem, EmbalagemCreate, EmbalagemUpdate};
pub use empresa::{Empresa, EmpresaCreate, EmpresaUpdate};
pub use estoque::{Estoque, EstoqueCreate, EstoqueUpdate};
pub use pedido::{Pedido, PedidoCreate, PedidoUpdate};
pub use produto::{Produto, ProdutoCreate, ProdutoUpdate};
pub use tributacao::{Tributacao, TributacaoCreate, TributacaoUpdate};
pub use usuario::{Usuario, UsuarioCreate, UsuarioUpdate};

/// Apply a partial update to a record.
///
/// `required` fields assign through (`T` on both sides); `optional` fields
/// wrap into `Some` (record side is `Option<T>`). Absent input fields retain
/// the prior value.
macro_rules! merge_update {
    ($dst:expr, $upd:expr;
     required: [$($r:ident),* $(,)?],
     optional: [$($o:ident),* $(,)?]) => {
        $(if let Some(v) = $upd.$r { $dst.$r = v; })*
        $(if let Some(v) = $upd.$o { $dst.$o = Some(v); })*
    };
}

pub(crate) use merge_update;

pub(crate) fn default_true() -> bool {
    true
}
