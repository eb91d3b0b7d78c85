//! Lexically scoped variable storage.
//!
//! Scopes live in an arena: a child scope stores the index of its parent and
//! the parent never references its children, so the chain has no cycles and
//! tearing a scope down is a matter of dropping its arena slot. Name
//! resolution walks the chain outward from the current scope; assignment
//! replaces the binding in the scope that owns it, which is not necessarily
//! the current one.

use std::collections::HashMap;

use crate::{ast::DeclKind, error::interpreter::RuntimeError, interpreter::value::Value};

/// Handle to a scope in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

/// One variable binding: its current value and the keyword that declared it.
#[derive(Debug, Clone)]
struct Binding {
	value: Value,
	kind:  DeclKind,
}

#[derive(Debug, Default)]
struct Scope {
	parent:    Option<ScopeId>,
	variables: HashMap<String, Binding>,
}

/// A chain of scopes, innermost first.
#[derive(Debug)]
pub struct Environment {
	scopes:  Vec<Scope>,
	current: ScopeId,
}

impl Environment {
	/// A fresh environment with a single root scope. Every session owns its
	/// own root; sessions never observe each other's declarations.
	pub fn new() -> Self {
		Self { scopes: vec![Scope::default()], current: ScopeId(0) }
	}

	/// Open a child scope of the current one and make it current.
	pub fn push_scope(&mut self) -> ScopeId {
		let id = ScopeId(self.scopes.len());
		self.scopes.push(Scope { parent: Some(self.current), variables: HashMap::new() });
		self.current = id;
		id
	}

	/// Leave the current scope, returning to its parent. Leaving the root is
	/// a no-op. The slot is reclaimed when the departed scope is the newest
	/// one.
	pub fn pop_scope(&mut self) {
		if let Some(parent) = self.scopes[self.current.0].parent {
			let departed = self.current;
			self.current = parent;
			if departed.0 == self.scopes.len() - 1 {
				self.scopes.pop();
			}
		}
	}

	/// Walk the scope chain outward and return the first binding for `name`.
	pub fn resolve(&self, name: &str) -> Result<Value, RuntimeError> {
		log::trace!("resolving '{name}'");
		let mut scope = Some(self.current);
		while let Some(id) = scope {
			let current = &self.scopes[id.0];
			if let Some(binding) = current.variables.get(name) {
				return Ok(binding.value.clone());
			}
			scope = current.parent;
		}
		Err(RuntimeError::UnresolvedIdentifier { name: name.to_string() })
	}

	/// Bind `value` under `name` in the current scope and return it.
	/// Redeclaring a name already bound in this scope silently shadows it.
	pub fn declare(&mut self, name: &str, kind: DeclKind, value: Value) -> Value {
		let scope = &mut self.scopes[self.current.0];
		scope.variables.insert(name.to_string(), Binding { value: value.clone(), kind });
		value
	}

	/// Replace the nearest binding for `name` with `value` and return it.
	/// The binding must exist somewhere in the chain and must not be a
	/// `const`.
	pub fn assign(&mut self, name: &str, value: Value) -> Result<Value, RuntimeError> {
		let mut scope = Some(self.current);
		while let Some(id) = scope {
			let current = &mut self.scopes[id.0];
			if let Some(binding) = current.variables.get_mut(name) {
				if binding.kind == DeclKind::Const {
					return Err(RuntimeError::ConstReassignment { name: name.to_string() });
				}
				binding.value = value.clone();
				return Ok(value);
			}
			scope = current.parent;
		}
		Err(RuntimeError::UndeclaredVariable { name: name.to_string() })
	}
}

impl Default for Environment {
	fn default() -> Self { Self::new() }
}
