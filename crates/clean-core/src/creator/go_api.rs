//! Go HTTP microservice archetype (chi router, Clean Architecture layout)

use super::{go_module_name, render, Creator, TemplateSet};
use crate::config::ProjectConfig;

pub(crate) fn creator() -> Creator {
    Creator {
        kind: "microservice",
        stack: "go",
        install_command: "go mod tidy",
        next_steps: "make run",
        templates,
    }
}

fn templates(config: &ProjectConfig) -> TemplateSet {
    let module = go_module_name(config);

    let mut files = TemplateSet::new();
    for (path, body) in [
        ("go.mod", GO_MOD),
        (".gitignore", GITIGNORE),
        ("Makefile", MAKEFILE),
        ("README.md", README),
        ("cmd/api/main.go", MAIN_GO),
        ("internal/domain/entity/entity.go", ENTITY_GO),
        ("internal/domain/service/service.go", SERVICE_GO),
        ("internal/application/port/port.go", PORT_GO),
        ("internal/application/usecase/usecase.go", USECASE_GO),
        ("internal/infrastructure/http/handler.go", HANDLER_GO),
        ("internal/infrastructure/http/router.go", ROUTER_GO),
    ] {
        files.insert(
            path.to_string(),
            render(body, config).replace("{{module}}", &module),
        );
    }
    files
}

const GO_MOD: &str = r#"module {{module}}

go 1.23.0

require (
	github.com/go-chi/chi/v5 v5.0.12
	github.com/google/uuid v1.6.0
)
"#;

const GITIGNORE: &str = r#"bin/
*.exe
*.dll
*.so
*.dylib
*.test
*.out
go.work
go.work.sum
.idea/
.vscode/
*.swp
.DS_Store
.env
"#;

const MAKEFILE: &str = r#".PHONY: build run clean test tidy

BINARY_NAME={{name}}
BUILD_DIR=bin
PORT=8080

build:
	@echo "Building..."
	@mkdir -p $(BUILD_DIR)
	go build -o $(BUILD_DIR)/$(BINARY_NAME) ./cmd/api

run: build
	./$(BUILD_DIR)/$(BINARY_NAME) -port=:$(PORT)

clean:
	rm -rf $(BUILD_DIR)
	go clean

test:
	go test -v ./...

tidy:
	go mod tidy

.DEFAULT_GOAL := build
"#;

const README: &str = r#"# {{name}}

{{description}}

## Architecture

```
internal/
├── domain/           # Business logic & entities
│   ├── entity/
│   └── service/
├── application/      # Use cases
│   ├── port/
│   └── usecase/
└── infrastructure/   # External interfaces
    └── http/
```

## Usage

```bash
make build    # Build binary
make run      # Run server on :8080
make test     # Run tests
```

## Endpoints

- `GET /health` - Health check
- `POST /api/v1/process` - Process data
"#;

const MAIN_GO: &str = r#"package main

import (
	"flag"
	"fmt"
	"log"
	"net/http"

	"{{module}}/internal/application/usecase"
	"{{module}}/internal/domain/service"
	handler "{{module}}/internal/infrastructure/http"
)

func main() {
	port := flag.String("port", ":8080", "Server port")
	flag.Parse()

	svc := service.NewService()
	uc := usecase.NewUseCase(svc)
	h := handler.NewHandler(uc)
	router := handler.NewRouter(h)

	fmt.Printf("Server starting on %s\n", *port)
	log.Fatal(http.ListenAndServe(*port, router))
}
"#;

const ENTITY_GO: &str = r#"package entity

type Input struct {
	Data string `json:"data"`
}

type Result struct {
	ID     string `json:"id"`
	Output string `json:"output"`
}
"#;

const SERVICE_GO: &str = r#"package service

import (
	"{{module}}/internal/domain/entity"
	"github.com/google/uuid"
)

type Service struct{}

func NewService() *Service {
	return &Service{}
}

func (s *Service) Process(input entity.Input) entity.Result {
	return entity.Result{
		ID:     uuid.New().String(),
		Output: "Processed: " + input.Data,
	}
}
"#;

const PORT_GO: &str = r#"package port

import "{{module}}/internal/domain/entity"

type ServicePort interface {
	Process(input entity.Input) entity.Result
}
"#;

const USECASE_GO: &str = r#"package usecase

import (
	"{{module}}/internal/application/port"
	"{{module}}/internal/domain/entity"
)

type UseCase struct {
	service port.ServicePort
}

func NewUseCase(svc port.ServicePort) *UseCase {
	return &UseCase{service: svc}
}

func (uc *UseCase) Execute(input entity.Input) entity.Result {
	return uc.service.Process(input)
}
"#;

const HANDLER_GO: &str = r#"package http

import (
	"encoding/json"
	"net/http"

	"{{module}}/internal/application/usecase"
	"{{module}}/internal/domain/entity"
)

type Handler struct {
	useCase *usecase.UseCase
}

func NewHandler(uc *usecase.UseCase) *Handler {
	return &Handler{useCase: uc}
}

func (h *Handler) Health(w http.ResponseWriter, r *http.Request) {
	w.WriteHeader(http.StatusOK)
	json.NewEncoder(w).Encode(map[string]string{"status": "ok"})
}

func (h *Handler) Process(w http.ResponseWriter, r *http.Request) {
	var input entity.Input
	if err := json.NewDecoder(r.Body).Decode(&input); err != nil {
		http.Error(w, err.Error(), http.StatusBadRequest)
		return
	}

	result := h.useCase.Execute(input)

	w.Header().Set("Content-Type", "application/json")
	json.NewEncoder(w).Encode(result)
}
"#;

const ROUTER_GO: &str = r#"package http

import "github.com/go-chi/chi/v5"

func NewRouter(h *Handler) *chi.Mux {
	r := chi.NewRouter()

	r.Get("/health", h.Health)
	r.Post("/api/v1/process", h.Process)

	return r
}
"#;
