use std::fmt::Display;

/// Where an instruction reads from or writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Named(String),
    Temporary(usize),
}

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Named(name) => write!(f, "{}", name),
            Target::Temporary(index) => write!(f, "%{}", index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    CreateVariable {
        target: Target,
        /// `None` for functions, which have no real type yet.
        type_name: Option<String>,
    },
    SetVariable {
        target: Target,
        type_name: Option<String>,
        value: u64,
    },
    Copy {
        source: Target,
        target: Target,
    },
    Add {
        first: Target,
        second: Target,
        target: Target,
    },
    Return {
        source: Target,
    },
}

fn type_suffix(type_name: &Option<String>) -> String {
    match type_name {
        Some(type_name) => format!(": {}", type_name),
        None => String::new(),
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::CreateVariable { target, type_name } => {
                write!(f, "create {}{}", target, type_suffix(type_name))
            }
            Instruction::SetVariable {
                target,
                type_name,
                value,
            } => write!(f, "set {}{} = {}", target, type_suffix(type_name), value),
            Instruction::Copy { source, target } => write!(f, "copy {} -> {}", source, target),
            Instruction::Add {
                first,
                second,
                target,
            } => write!(f, "add {}, {} -> {}", first, second, target),
            Instruction::Return { source } => write!(f, "ret {}", source),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub type_name: String,
}

/// Everything defined at one level: the top level or a function body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Namespace {
    pub functions: Vec<Function>,
    pub variables: Vec<Variable>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub arguments: Vec<String>,
    pub return_types: Vec<String>,
    pub namespace: Namespace,
    pub body: Vec<Instruction>,
}

/// The lowered form of a whole file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub instructions: Vec<Instruction>,
    pub namespace: Namespace,
    pub imports: Vec<Vec<String>>,
}

/// Renders the top-level instructions, a blank line, then every function
/// with its body indented by a tab.
pub fn prettyprint_ir(program: &Program) -> String {
    let mut result = String::new();

    for instruction in &program.instructions {
        result.push_str(&format!("{}\n", instruction));
    }

    result.push('\n');

    for function in &program.namespace.functions {
        result.push_str(&format!(
            "function: name: {} args: {:?} return: {:?}\n",
            function.name, function.arguments, function.return_types
        ));
        for instruction in &function.body {
            result.push_str(&format!("\t{}\n", instruction));
        }
    }

    result
}
