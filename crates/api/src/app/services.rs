//! Application services: one table per registered type, the registry that
//! dispatches route names to handlers, and the token service.

use std::sync::Arc;

use gestao_auth::TokenService;
use gestao_domain::{
    Cadastro, Conta, Embalagem, Empresa, Estoque, Pedido, Produto, Tributacao, Usuario,
};
use gestao_registry::{GenericHandler, Registry, UserHandler};
use gestao_store::Table;

/// Session token lifetime.
const TOKEN_TTL_MINUTES: i64 = 60 * 24;

pub struct AppServices {
    pub registry: Registry,
    pub tokens: Arc<TokenService>,

    // Typed stores, shared with the registry handlers. Login and the
    // dashboard aggregations read these directly.
    pub empresas: Arc<Table<Empresa>>,
    pub usuarios: Arc<Table<Usuario>>,
    pub cadastros: Arc<Table<Cadastro>>,
    pub produtos: Arc<Table<Produto>>,
    pub embalagens: Arc<Table<Embalagem>>,
    pub contas: Arc<Table<Conta>>,
    pub estoque: Arc<Table<Estoque>>,
    pub pedidos: Arc<Table<Pedido>>,
    pub tributacoes: Arc<Table<Tributacao>>,
}

impl AppServices {
    pub fn new(jwt_secret: &str) -> Self {
        let empresas = Arc::new(Table::new());
        let usuarios = Arc::new(Table::new());
        let cadastros = Arc::new(Table::new());
        let produtos = Arc::new(Table::new());
        let embalagens = Arc::new(Table::new());
        let contas = Arc::new(Table::new());
        let estoque = Arc::new(Table::new());
        let pedidos = Arc::new(Table::new());
        let tributacoes = Arc::new(Table::new());

        // Explicit registration list: every routable type, with the user
        // type behind its credential-hashing handler.
        let registry = Registry::builder()
            .register::<Empresa>(Arc::new(GenericHandler::new(empresas.clone())))
            .register::<Usuario>(Arc::new(UserHandler::new(usuarios.clone())))
            .register::<Cadastro>(Arc::new(GenericHandler::new(cadastros.clone())))
            .register::<Produto>(Arc::new(GenericHandler::new(produtos.clone())))
            .register::<Embalagem>(Arc::new(GenericHandler::new(embalagens.clone())))
            .register::<Conta>(Arc::new(GenericHandler::new(contas.clone())))
            .register::<Estoque>(Arc::new(GenericHandler::new(estoque.clone())))
            .register::<Pedido>(Arc::new(GenericHandler::new(pedidos.clone())))
            .register::<Tributacao>(Arc::new(GenericHandler::new(tributacoes.clone())))
            .build();

        Self {
            registry,
            tokens: Arc::new(TokenService::new(jwt_secret, TOKEN_TTL_MINUTES)),
            empresas,
            usuarios,
            cadastros,
            produtos,
            embalagens,
            contas,
            estoque,
            pedidos,
            tributacoes,
        }
    }
}
