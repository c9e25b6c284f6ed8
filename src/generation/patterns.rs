//! Design-pattern template library
//!
//! A fixed registry of ten pattern names, each backed by a canned TypeScript
//! template rendered through `tera`. The singleton template interpolates the
//! detected (or given) class name; every other pattern appends its template
//! to the input code verbatim. No static analysis of the input occurs.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tera::{Context, Tera};

use crate::core::{Error, Result};

/// The ten registered pattern identifiers, case-sensitive, in registry order
pub const SUPPORTED_PATTERNS: [&str; 10] = [
    "singleton",
    "factory",
    "observer",
    "strategy",
    "decorator",
    "adapter",
    "facade",
    "proxy",
    "command",
    "builder",
];

/// Fallback class name when none is given and none can be detected
const DEFAULT_CLASS_NAME: &str = "MyClass";

static CLASS_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"class\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap());

static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("singleton", SINGLETON),
        ("factory", FACTORY),
        ("observer", OBSERVER),
        ("strategy", STRATEGY),
        ("decorator", DECORATOR),
        ("adapter", ADAPTER),
        ("facade", FACADE),
        ("proxy", PROXY),
        ("command", COMMAND),
        ("builder", BUILDER),
    ])
    .expect("pattern templates parse");
    tera
});

/// Options for pattern application
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatternOptions {
    /// Overrides the class name detected in the input code
    pub class_name: Option<String>,
}

/// True iff `name` is one of the ten registered pattern identifiers.
pub fn is_valid_pattern(name: &str) -> bool {
    SUPPORTED_PATTERNS.contains(&name)
}

/// The registered pattern identifiers, in a stable order.
pub fn supported_patterns() -> &'static [&'static str] {
    &SUPPORTED_PATTERNS
}

/// Apply a design-pattern template to the given code.
///
/// Any name outside the registry (including the empty string) fails with
/// `Error::UnknownPattern`.
pub fn apply_pattern(name: &str, code: &str, options: &PatternOptions) -> Result<String> {
    if !is_valid_pattern(name) {
        return Err(Error::UnknownPattern(name.to_string()));
    }

    if name == "singleton" {
        let class_name = options
            .class_name
            .clone()
            .or_else(|| {
                CLASS_NAME_RE
                    .captures(code)
                    .map(|captures| captures[1].to_string())
            })
            .unwrap_or_else(|| DEFAULT_CLASS_NAME.to_string());
        let mut context = Context::new();
        context.insert("class_name", &class_name);
        return Ok(TEMPLATES.render("singleton", &context)?);
    }

    let template = TEMPLATES.render(name, &Context::new())?;
    if code.trim().is_empty() {
        Ok(template)
    } else {
        Ok(format!("{code}\n\n{template}"))
    }
}

const SINGLETON: &str = r#"export class {{ class_name }} {
  private static instance: {{ class_name }};

  private constructor() {}

  public static getInstance(): {{ class_name }} {
    if (!{{ class_name }}.instance) {
      {{ class_name }}.instance = new {{ class_name }}();
    }
    return {{ class_name }}.instance;
  }
}
"#;

const FACTORY: &str = r#"export interface Product {
  operation(): string;
}

export class ConcreteProductA implements Product {
  operation(): string {
    return 'ConcreteProductA';
  }
}

export class ConcreteProductB implements Product {
  operation(): string {
    return 'ConcreteProductB';
  }
}

export class ProductFactory {
  static create(kind: 'a' | 'b'): Product {
    switch (kind) {
      case 'a':
        return new ConcreteProductA();
      case 'b':
        return new ConcreteProductB();
    }
  }
}
"#;

const OBSERVER: &str = r#"export interface Observer<T> {
  update(value: T): void;
}

export class Subject<T> {
  private observers: Observer<T>[] = [];

  subscribe(observer: Observer<T>): void {
    this.observers.push(observer);
  }

  unsubscribe(observer: Observer<T>): void {
    this.observers = this.observers.filter((o) => o !== observer);
  }

  notify(value: T): void {
    for (const observer of this.observers) {
      observer.update(value);
    }
  }
}
"#;

const STRATEGY: &str = r#"export interface Strategy {
  execute(input: string): string;
}

export class DefaultStrategy implements Strategy {
  execute(input: string): string {
    return input;
  }
}

export class StrategyContext {
  constructor(private strategy: Strategy) {}

  setStrategy(strategy: Strategy): void {
    this.strategy = strategy;
  }

  run(input: string): string {
    return this.strategy.execute(input);
  }
}
"#;

const DECORATOR: &str = r#"export interface Component {
  render(): string;
}

export class BaseComponent implements Component {
  render(): string {
    return 'base';
  }
}

export abstract class ComponentDecorator implements Component {
  constructor(protected readonly inner: Component) {}

  render(): string {
    return this.inner.render();
  }
}

export class BorderDecorator extends ComponentDecorator {
  render(): string {
    return `[${super.render()}]`;
  }
}
"#;

const ADAPTER: &str = r#"export interface Target {
  request(): string;
}

export class Adaptee {
  specificRequest(): string {
    return 'adaptee';
  }
}

export class Adapter implements Target {
  constructor(private readonly adaptee: Adaptee) {}

  request(): string {
    return this.adaptee.specificRequest();
  }
}
"#;

const FACADE: &str = r#"class SubsystemA {
  start(): string {
    return 'A started';
  }
}

class SubsystemB {
  start(): string {
    return 'B started';
  }
}

export class Facade {
  private readonly a = new SubsystemA();
  private readonly b = new SubsystemB();

  startAll(): string[] {
    return [this.a.start(), this.b.start()];
  }
}
"#;

const PROXY: &str = r#"export interface Service {
  request(): string;
}

export class RealService implements Service {
  request(): string {
    return 'real response';
  }
}

export class ServiceProxy implements Service {
  private service?: RealService;

  request(): string {
    if (!this.service) {
      this.service = new RealService();
    }
    return this.service.request();
  }
}
"#;

const COMMAND: &str = r#"export interface Command {
  execute(): void;
  undo(): void;
}

export class CommandInvoker {
  private history: Command[] = [];

  run(command: Command): void {
    command.execute();
    this.history.push(command);
  }

  undoLast(): void {
    const command = this.history.pop();
    if (command) {
      command.undo();
    }
  }
}
"#;

const BUILDER: &str = r#"export class Product {
  parts: string[] = [];
}

export class ProductBuilder {
  private product = new Product();

  addPart(part: string): this {
    this.product.parts.push(part);
    return this;
  }

  build(): Product {
    const built = this.product;
    this.product = new Product();
    return built;
  }
}
"#;
