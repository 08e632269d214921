//! Enumerated column types, centralized.
//!
//! Each enum exposes a `MEMBERS` table so the metadata introspector can emit
//! one select option per member without touching the Rust type at runtime.
//! The serde rename is the persisted value.

use gestao_core::EnumMember;
use serde::{Deserialize, Serialize};

macro_rules! domain_enum {
    ($(#[$meta:meta])* $name:ident {
        $($variant:ident => $value:literal),+ $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $value)] $variant,)+
        }

        impl $name {
            pub const MEMBERS: &'static [EnumMember] = &[
                $(EnumMember { name: stringify!($variant), value: $value },)+
            ];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// Empresa

domain_enum!(EmpresaCrt {
    SimplesNacional => "simples nacional",
    LucroPresumido => "lucro presumido",
    LucroReal => "lucro real",
});

impl Default for EmpresaCrt {
    fn default() -> Self {
        Self::SimplesNacional
    }
}

domain_enum!(EmpresaEmissao {
    Desenvolvimento => "desenvolvimento",
    Producao => "producao",
});

impl Default for EmpresaEmissao {
    fn default() -> Self {
        Self::Desenvolvimento
    }
}

// Usuario

domain_enum!(UsuarioPerfil {
    Admin => "admin",
    Vendedor => "vendedor",
    Financeiro => "financeiro",
    Estoquista => "estoquista",
});

impl Default for UsuarioPerfil {
    fn default() -> Self {
        Self::Vendedor
    }
}

// Cadastro

domain_enum!(CadastroTipoPessoa {
    Fisica => "fisica",
    Juridica => "juridica",
});

impl Default for CadastroTipoPessoa {
    fn default() -> Self {
        Self::Fisica
    }
}

domain_enum!(CadastroTipoCadastro {
    Cliente => "cliente",
    Fornecedor => "fornecedor",
    Transportadora => "transportadora",
    Vendedor => "vendedor",
});

impl Default for CadastroTipoCadastro {
    fn default() -> Self {
        Self::Cliente
    }
}

domain_enum!(CadastroIndicadorIe {
    NaoSeAplica => "0",
    ContribuinteIcms => "1",
    Isento => "2",
    NaoContribuinte => "9",
});

impl Default for CadastroIndicadorIe {
    fn default() -> Self {
        Self::NaoContribuinte
    }
}

// Produto

domain_enum!(ProdutoUnidade {
    Un => "un",
    Pc => "pc",
    Kg => "kg",
    Mt => "mt",
    Cx => "cx",
});

impl Default for ProdutoUnidade {
    fn default() -> Self {
        Self::Un
    }
}

domain_enum!(ProdutoTipo {
    MercadoriaRevenda => "mercadoria de revenda",
    MateriaPrima => "materia prima",
    ProdutoAcabado => "produto acabado",
    Servico => "servico",
});

impl Default for ProdutoTipo {
    fn default() -> Self {
        Self::MercadoriaRevenda
    }
}

domain_enum!(ProdutoOrigem {
    Nacional => "nacional",
    EstrangeiraImportDireta => "estrangeira_import_direta",
    EstrangeiraAdqMercInterno => "estrangeira_adq_merc_interno",
    NacionalConteudoImport40 => "nacional_conteudo_import_40",
    NacionalConteudoImport70 => "nacional_conteudo_import_70",
    NacionalProducaoBasica => "nacional_producao_basica",
});

impl Default for ProdutoOrigem {
    fn default() -> Self {
        Self::Nacional
    }
}

// Conta

domain_enum!(ContaTipo {
    AReceber => "A Receber",
    APagar => "A Pagar",
});

impl Default for ContaTipo {
    fn default() -> Self {
        Self::AReceber
    }
}

domain_enum!(ContaSituacao {
    EmAberto => "Em Aberto",
    Pago => "Pago",
    Vencido => "Vencido",
    Cancelado => "Cancelado",
});

impl Default for ContaSituacao {
    fn default() -> Self {
        Self::EmAberto
    }
}

// Estoque

domain_enum!(EstoqueSituacao {
    Disponivel => "Disponivel",
    Reservado => "Reservado",
    Indisponivel => "Indisponível",
});

impl Default for EstoqueSituacao {
    fn default() -> Self {
        Self::Disponivel
    }
}

// Pedido

domain_enum!(PedidoSituacao {
    Orcamento => "Orçamento",
    Aprovacao => "Aprovação",
    Programacao => "Programação",
    Producao => "Produção",
    Embalagem => "Embalagem",
    Faturamento => "Faturamento",
    Expedicao => "Expedição",
    Cancelado => "Cancelado",
});

impl Default for PedidoSituacao {
    fn default() -> Self {
        Self::Orcamento
    }
}

domain_enum!(PedidoModalidadeFrete {
    Cif => "0",
    Fob => "1",
    Terceiros => "2",
    ProprioRemetente => "3",
    ProprioDestinatario => "4",
    SemFrete => "9",
});

impl Default for PedidoModalidadeFrete {
    fn default() -> Self {
        Self::SemFrete
    }
}

// Tributacao

domain_enum!(RegraRegimeEmitente {
    SimplesNacional => "Simples Nacional",
    LucroPresumido => "Lucro Presumido",
    LucroReal => "Lucro Real",
});

domain_enum!(RegraTipoOperacao {
    Venda => "Venda",
    Devolucao => "Devolucao",
    Remessa => "Remessa",
});

domain_enum!(RegraTipoCliente {
    Pf => "PF",
    PjContribuinte => "PJ_Contribuinte",
    PjIsento => "PJ_Isento",
    PjNaoContribuinte => "PJ_NaoContribuinte",
});

domain_enum!(RegraLocalizacaoDestino {
    Interna => "Interna",
    Interestadual => "Interestadual",
    Exterior => "Exterior",
});
