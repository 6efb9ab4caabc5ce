//! Parser for the netlist language.

use std::collections::HashSet;

use super::ast::*;
use super::lexer::{parse_value, Lexer, Token, TokenKind};
use crate::error::{OhmicError, Result};

/// Parser for netlists.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire netlist.
    pub fn parse(&mut self) -> Result<Netlist> {
        let mut netlist = Netlist::new();
        let mut names = HashSet::new();

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                TokenKind::Newline => {
                    self.advance()?;
                    continue;
                }
                TokenKind::Directive => self.parse_directive(&mut netlist)?,
                TokenKind::Identifier => {
                    let resistor = self.parse_resistor()?;
                    if !names.insert(resistor.name.to_ascii_uppercase()) {
                        return Err(OhmicError::DuplicateComponent {
                            name: resistor.name,
                        });
                    }
                    for node in &resistor.nodes {
                        netlist.declare_node(node);
                    }
                    netlist.resistors.push(resistor);
                }
                _ => {
                    return Err(OhmicError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }

            self.end_of_line()?;
        }

        Ok(netlist)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Consume the newline ending a statement, or accept EOF.
    fn end_of_line(&mut self) -> Result<()> {
        match self.current.kind {
            TokenKind::Newline => self.advance(),
            TokenKind::Eof => Ok(()),
            _ => Err(OhmicError::parse(
                self.current.line,
                format!("unexpected trailing token: {:?}", self.current.text),
            )),
        }
    }

    /// Node names may be identifiers or bare numbers like `0`.
    fn node_name(&self) -> Option<String> {
        match self.current.kind {
            TokenKind::Identifier | TokenKind::Number => Some(self.current.text.clone()),
            _ => None,
        }
    }

    fn expect_node(&mut self, line: usize, context: &str) -> Result<String> {
        let name = self
            .node_name()
            .ok_or_else(|| OhmicError::parse(line, format!("expected node name after {}", context)))?;
        self.advance()?;
        Ok(name)
    }

    fn parse_directive(&mut self, netlist: &mut Netlist) -> Result<()> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        match directive.to_lowercase().as_str() {
            ".source" => {
                let node = self.expect_node(line, &directive)?;
                if netlist.source.is_some() {
                    return Err(OhmicError::parse(line, "source terminal specified twice"));
                }
                netlist.declare_node(&node);
                netlist.source = Some(node);
            }
            ".target" => {
                let node = self.expect_node(line, &directive)?;
                if netlist.target.is_some() {
                    return Err(OhmicError::parse(line, "target terminal specified twice"));
                }
                netlist.declare_node(&node);
                netlist.target = Some(node);
            }
            ".node" => {
                let first = self.expect_node(line, &directive)?;
                netlist.declare_node(&first);
                while let Some(node) = self.node_name() {
                    self.advance()?;
                    netlist.declare_node(&node);
                }
            }
            _ => {
                return Err(OhmicError::parse(
                    line,
                    format!("unknown directive: {}", directive),
                ));
            }
        }

        Ok(())
    }

    fn parse_resistor(&mut self) -> Result<ResistorDef> {
        let name = self.current.text.clone();
        let line = self.current.line;

        if !name.starts_with(['R', 'r']) {
            return Err(OhmicError::UnknownComponentType {
                component_type: name,
                line,
            });
        }
        self.advance()?;

        let mut operands = Vec::with_capacity(3);
        while let Some(text) = self.node_name() {
            operands.push((self.current.kind, text));
            self.advance()?;
        }

        if operands.len() < 3 {
            let message = if operands.len() < 2 {
                format!("expected 2 nodes, got {}", operands.len())
            } else {
                "resistor requires a value".to_string()
            };
            return Err(OhmicError::invalid_component(&name, line, message));
        }
        if operands.len() > 3 {
            return Err(OhmicError::invalid_component(
                &name,
                line,
                format!("expected 2 nodes and a value, got {} operands", operands.len()),
            ));
        }

        let (value_kind, value_text) = &operands[2];
        let resistance = match value_kind {
            TokenKind::Number => parse_value(value_text),
            _ => None,
        }
        .ok_or_else(|| {
            OhmicError::invalid_component(&name, line, format!("invalid resistance '{}'", value_text))
        })?;

        Ok(ResistorDef {
            name,
            nodes: [operands[0].1.clone(), operands[1].1.clone()],
            resistance,
            line,
        })
    }
}
